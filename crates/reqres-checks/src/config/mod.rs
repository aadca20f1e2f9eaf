// crates/reqres-checks/src/config/mod.rs
// ============================================================================
// Module: Suite Configuration
// Description: Centralized configuration for the reqres contract checks.
// Purpose: Provide typed access to suite settings and their defaults.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Suite configuration is read from environment variables and mapped into a
//! small typed structure that is passed explicitly to the client and runner.
//! Environment inputs are untrusted and parsed fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::ColorSweep;
pub use env::ConfigError;
pub use env::DEFAULT_BASE_URL;
pub use env::LogTarget;
pub use env::SuiteConfig;
pub use env::SuiteEnv;
pub use env::read_env_strict;
