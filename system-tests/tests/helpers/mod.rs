// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for reqres contract-check system-tests.
// Purpose: Provide the service stub and client wiring used by suites.
// Dependencies: system-tests, reqres-checks
// ============================================================================

//! ## Overview
//! Shared helpers for reqres contract-check system-tests.
//! Purpose: Provide the service stub and client wiring used by suites.
//! Invariants:
//! - Offline suites never reach the network beyond loopback.
//! - Each test owns its stub; stubs are torn down on drop.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod harness;
