// crates/reqres-checks/src/runner.rs
// ============================================================================
// Module: Scenario Runner
// Description: Sequential execution of contract scenarios with a run report.
// Purpose: Time each scenario and collect pass/fail results.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`run_all`] awaits each scenario before starting the next. A failing
//! scenario is recorded and the run continues with the remaining ones.

use std::time::Instant;

use serde::Serialize;

use crate::audit::elapsed_millis;
use crate::client::ReqresClient;
use crate::config::ColorSweep;
use crate::scenarios::Scenario;

/// Result of one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Scenario identifier.
    pub scenario: &'static str,
    /// Human-readable scenario title.
    pub display_name: &'static str,
    /// Whether every check passed.
    pub passed: bool,
    /// Wall-clock duration.
    pub duration_ms: u64,
    /// Outcome notes (empty on failure).
    pub notes: Vec<String>,
    /// Failure kind label when the scenario failed.
    pub error_kind: Option<&'static str>,
    /// Failure message when the scenario failed.
    pub error: Option<String>,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Number of scenarios run.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Number that failed.
    pub failed: usize,
    /// Wall-clock duration of the whole run.
    pub duration_ms: u64,
    /// Per-scenario results in execution order.
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    /// Returns true when every scenario passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Returns the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|result| !result.passed)
    }
}

/// Runs one scenario with a client scoped to its id.
pub async fn run_scenario(
    client: &ReqresClient,
    scenario: Scenario,
    sweep: ColorSweep,
) -> ScenarioResult {
    let scoped = client.for_scenario(scenario.id());
    let started = Instant::now();
    let outcome = scenario.run(&scoped, sweep).await;
    let duration_ms = elapsed_millis(started);
    match outcome {
        Ok(outcome) => ScenarioResult {
            scenario: scenario.id(),
            display_name: scenario.display_name(),
            passed: true,
            duration_ms,
            notes: outcome.notes,
            error_kind: None,
            error: None,
        },
        Err(err) => ScenarioResult {
            scenario: scenario.id(),
            display_name: scenario.display_name(),
            passed: false,
            duration_ms,
            notes: Vec::new(),
            error_kind: Some(err.kind()),
            error: Some(err.to_string()),
        },
    }
}

/// Runs every scenario in [`Scenario::ALL`] order, strictly sequentially.
pub async fn run_all(client: &ReqresClient, sweep: ColorSweep) -> RunReport {
    let started = Instant::now();
    let mut report = RunReport::default();
    for scenario in Scenario::ALL {
        let result = run_scenario(client, scenario, sweep).await;
        if result.passed {
            report.passed += 1;
        } else {
            report.failed += 1;
        }
        report.results.push(result);
    }
    report.total = report.results.len();
    report.duration_ms = elapsed_millis(started);
    report
}
