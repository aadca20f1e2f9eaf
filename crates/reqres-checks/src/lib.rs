// crates/reqres-checks/src/lib.rs
// ============================================================================
// Module: Reqres Contract Checks Library
// Description: Contract checks for the public reqres demo REST service.
// Purpose: Issue fixed HTTP calls and assert on status codes and JSON shape.
// Dependencies: reqwest, serde, serde_json, serde_jcs, thiserror, url
// ============================================================================

//! ## Overview
//! This crate holds the five contract scenarios for the reqres demo service
//! together with the client, assertion helpers, exchange logging, and report
//! artifacts they rely on.
//! Invariants:
//! - Scenarios are independent and run strictly sequentially.
//! - The first failed assertion aborts only the scenario that raised it.
//! - HTTP sends are never retried.
//!
//! The base URL and every other setting flow in through an explicit
//! [`SuiteConfig`]; nothing is held in process-wide mutable state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod client;
pub mod config;
pub mod expect;
pub mod models;
pub mod report;
pub mod runner;
pub mod scenarios;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::ExchangeEvent;
pub use audit::ExchangeLogSink;
pub use audit::FileExchangeLog;
pub use audit::NoopExchangeLog;
pub use audit::StderrExchangeLog;
pub use client::ApiResponse;
pub use client::ClientError;
pub use client::ExchangeRecord;
pub use client::ReqresClient;
pub use config::ColorSweep;
pub use config::ConfigError;
pub use config::LogTarget;
pub use config::SuiteConfig;
pub use config::SuiteEnv;
pub use expect::CheckError;
pub use report::ReportError;
pub use report::TestArtifacts;
pub use report::TestReporter;
pub use runner::RunReport;
pub use runner::ScenarioResult;
pub use runner::run_all;
pub use runner::run_scenario;
pub use scenarios::Scenario;
pub use scenarios::ScenarioOutcome;
