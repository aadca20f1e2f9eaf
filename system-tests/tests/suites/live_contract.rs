// system-tests/tests/suites/live_contract.rs
// ============================================================================
// Module: Live Contract Tests
// Description: One test per scenario plus a full batch run.
// Purpose: Record a pass/fail summary and transcript for every live check.
// Dependencies: reqres-checks
// ============================================================================

//! Live contract tests for reqres contract-check system-tests.

use reqres_checks::ReqresClient;
use reqres_checks::Scenario;
use reqres_checks::SuiteConfig;
use reqres_checks::TestReporter;
use reqres_checks::run_all;
use reqres_checks::run_scenario;

/// Runs one scenario live and records its summary and transcript.
async fn check_live(scenario: Scenario) -> Result<(), Box<dyn std::error::Error>> {
    let config = SuiteConfig::load()?;
    let client = ReqresClient::new(&config)?;
    let mut reporter = TestReporter::for_scenario(&config, scenario)?;

    let result = run_scenario(&client, scenario, config.color_sweep).await;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.artifacts().write_json("result.json", &result)?;
    let artifacts = vec![
        "summary.json".to_string(),
        "summary.md".to_string(),
        "transcript.json".to_string(),
        "result.json".to_string(),
    ];

    if result.passed {
        reporter.finish("pass", result.notes, artifacts)?;
        return Ok(());
    }
    let message = result.error.unwrap_or_else(|| "scenario failed".to_string());
    reporter.finish("fail", vec![message.clone()], artifacts)?;
    Err(message.into())
}

#[tokio::test(flavor = "multi_thread")]
async fn live_register_success() -> Result<(), Box<dyn std::error::Error>> {
    check_live(Scenario::RegisterSuccess).await
}

#[tokio::test(flavor = "multi_thread")]
async fn live_register_missing_password() -> Result<(), Box<dyn std::error::Error>> {
    check_live(Scenario::RegisterMissingPassword).await
}

#[tokio::test(flavor = "multi_thread")]
async fn live_color_fields_complete() -> Result<(), Box<dyn std::error::Error>> {
    check_live(Scenario::ColorFieldsComplete).await
}

#[tokio::test(flavor = "multi_thread")]
async fn live_unknown_color_not_found() -> Result<(), Box<dyn std::error::Error>> {
    check_live(Scenario::UnknownColorNotFound).await
}

#[tokio::test(flavor = "multi_thread")]
async fn live_update_user() -> Result<(), Box<dyn std::error::Error>> {
    check_live(Scenario::UpdateUser).await
}

#[tokio::test(flavor = "multi_thread")]
async fn live_run_all() -> Result<(), Box<dyn std::error::Error>> {
    let config = SuiteConfig::load()?;
    let client = ReqresClient::new(&config)?;
    let mut reporter = TestReporter::new(&config, "live_run_all")?;

    let report = run_all(&client, config.color_sweep).await;
    reporter.artifacts().write_json("run_report.json", &report)?;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    let artifacts = vec![
        "summary.json".to_string(),
        "summary.md".to_string(),
        "run_report.json".to_string(),
        "transcript.json".to_string(),
    ];
    let mut notes = vec![format!("{} of {} scenarios passed", report.passed, report.total)];
    notes.extend(report.failures().map(|failure| {
        format!("{}: {}", failure.scenario, failure.error.as_deref().unwrap_or("failed"))
    }));

    if report.all_passed() {
        reporter.finish("pass", notes, artifacts)?;
        return Ok(());
    }
    reporter.finish("fail", notes.clone(), artifacts)?;
    Err(notes.join("; ").into())
}
