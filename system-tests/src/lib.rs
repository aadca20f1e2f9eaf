// system-tests/src/lib.rs
// ============================================================================
// Module: Reqres System Tests Library
// Description: Shared fixtures for the reqres contract-check system tests.
// Purpose: Provide the demo service's reference dataset to stub-backed suites.
// Dependencies: reqres-checks
// ============================================================================

//! ## Overview
//! This crate hosts the fixture dataset used by the offline stub of the reqres
//! demo service in `system-tests/tests`. The live suite runs the same
//! scenarios against the real service behind the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixtures;
