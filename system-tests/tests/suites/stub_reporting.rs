// system-tests/tests/suites/stub_reporting.rs
// ============================================================================
// Module: Stub Reporting Tests
// Description: Transcript, exchange log, and summary artifacts.
// Purpose: Confirm every exchange is recorded and reports land on disk.
// Dependencies: system-tests helpers, tempfile
// ============================================================================

//! Transcript, exchange log, and artifact tests for system-tests.

use std::sync::Arc;
use std::sync::Mutex;

use helpers::harness::stub_client;
use helpers::harness::stub_config;
use helpers::reqres_stub::spawn_reqres_stub;
use reqres_checks::ColorSweep;
use reqres_checks::ExchangeEvent;
use reqres_checks::ExchangeLogSink;
use reqres_checks::LogTarget;
use reqres_checks::ReqresClient;
use reqres_checks::Scenario;
use reqres_checks::TestArtifacts;
use reqres_checks::TestReporter;
use reqres_checks::run_all;
use reqres_checks::run_scenario;
use serde_json::Value;

use crate::helpers;

/// Sink that keeps events in memory.
#[derive(Default)]
struct CaptureLog {
    /// Captured events.
    events: Mutex<Vec<ExchangeEvent>>,
}

impl ExchangeLogSink for CaptureLog {
    fn record(&self, event: &ExchangeEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn transcript_labels_exchanges_by_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_reqres_stub()?;
    let client = stub_client(&stub)?;

    let report = run_all(&client, ColorSweep::EachId).await;
    if !report.all_passed() {
        return Err(format!("stub run failed: {report:?}").into());
    }

    let transcript = client.transcript();
    // register x2, listing + 12 colors, listing + missing id, update.
    if transcript.len() != 18 {
        return Err(format!("expected 18 exchanges, saw {}", transcript.len()).into());
    }
    for (index, record) in transcript.iter().enumerate() {
        if usize::try_from(record.sequence).ok() != Some(index + 1) {
            return Err(format!("sequence gap at {index}: {}", record.sequence).into());
        }
    }
    let labels: Vec<&str> =
        transcript.iter().filter_map(|record| record.scenario.as_deref()).collect();
    if labels.len() != transcript.len() {
        return Err("every exchange must carry a scenario label".into());
    }
    if labels[0] != "register_success" || labels[17] != "update_user" {
        return Err(format!("unexpected labels: {labels:?}").into());
    }
    let missing = &transcript[16];
    if missing.status != Some(404) || !missing.url.ends_with("/api/unknown/13") {
        return Err(format!("unexpected not-found record: {missing:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn custom_sink_receives_every_exchange() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_reqres_stub()?;
    let capture = Arc::new(CaptureLog::default());
    let sink: Arc<dyn ExchangeLogSink> = Arc::<CaptureLog>::clone(&capture);
    let client = ReqresClient::new(&stub_config(&stub))?.with_log_sink(sink);

    let result = run_scenario(&client, Scenario::RegisterMissingPassword, ColorSweep::EachId).await;
    if !result.passed {
        return Err(format!("scenario failed: {result:?}").into());
    }

    let events = capture.events.lock().map_err(|_| "capture lock poisoned")?.clone();
    if events.len() != 1 {
        return Err(format!("expected one event, saw {}", events.len()).into());
    }
    let event = &events[0];
    if event.event != "http_exchange"
        || event.method != "POST"
        || event.status != Some(400)
        || event.scenario.as_deref() != Some("register_missing_password")
    {
        return Err(format!("unexpected event: {event:?}").into());
    }
    let error = event.response_body.as_ref().and_then(|body| body.get("error"));
    if error != Some(&Value::from("Missing password")) {
        return Err(format!("response body not logged: {:?}", event.response_body).into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn file_log_target_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_reqres_stub()?;
    let temp = tempfile::tempdir()?;
    let log_path = temp.path().join("logs").join("exchanges.jsonl");
    let mut config = stub_config(&stub);
    config.log = LogTarget::File(log_path.clone());
    let client = ReqresClient::new(&config)?;

    let result = run_scenario(&client, Scenario::UnknownColorNotFound, ColorSweep::EachId).await;
    if !result.passed {
        return Err(format!("scenario failed: {result:?}").into());
    }

    let contents = std::fs::read_to_string(&log_path)?;
    let lines: Vec<Value> =
        contents.lines().map(serde_json::from_str).collect::<Result<_, _>>()?;
    if lines.len() != 2 {
        return Err(format!("expected two log lines, saw {}", lines.len()).into());
    }
    let statuses: Vec<Option<u64>> =
        lines.iter().map(|line| line.get("status").and_then(Value::as_u64)).collect();
    if statuses != vec![Some(200), Some(404)] {
        return Err(format!("unexpected logged statuses: {statuses:?}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn reporter_writes_summary_and_transcript() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_reqres_stub()?;
    let client = stub_client(&stub)?;
    let temp = tempfile::tempdir()?;
    let artifacts = TestArtifacts::at(temp.path().join("update_user"))?;
    let mut reporter = TestReporter::with_artifacts(artifacts, "update_user");

    let result = run_scenario(&client, Scenario::UpdateUser, ColorSweep::EachId).await;
    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.artifacts().write_json("result.json", &result)?;
    let status = if result.passed { "pass" } else { "fail" };
    reporter.finish(
        status,
        result.notes.clone(),
        vec!["transcript.json".to_string(), "result.json".to_string()],
    )?;

    let root = temp.path().join("update_user");
    let summary: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("summary.json"))?)?;
    if summary.get("status").and_then(Value::as_str) != Some("pass") {
        return Err(format!("unexpected summary: {summary}").into());
    }
    let transcript: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("transcript.json"))?)?;
    let entries = transcript.as_array().map_or(0, Vec::len);
    if entries != 1 {
        return Err(format!("expected one transcript entry, saw {entries}").into());
    }
    let result_json: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("result.json"))?)?;
    if result_json.get("passed").and_then(Value::as_bool) != Some(true) {
        return Err(format!("unexpected result artifact: {result_json}").into());
    }
    let markdown = std::fs::read_to_string(root.join("summary.md"))?;
    if !markdown.contains("- Status: pass") {
        return Err(format!("markdown summary missing status: {markdown}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn run_report_artifact_is_valid_json() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_reqres_stub()?;
    let client = stub_client(&stub)?;
    let temp = tempfile::tempdir()?;
    let artifacts = TestArtifacts::at(temp.path().join("run_all"))?;

    let report = run_all(&client, ColorSweep::EachId).await;
    let report_path = artifacts.write_json("run_report.json", &report)?;
    let transcript_path = artifacts.write_json("transcript.json", &client.transcript())?;

    let written: Value = serde_json::from_str(&std::fs::read_to_string(report_path)?)?;
    if written.get("passed").and_then(Value::as_u64) != Some(5) {
        return Err(format!("unexpected run report: {written}").into());
    }
    let results = written.get("results").and_then(Value::as_array).map_or(0, Vec::len);
    if results != 5 || written.get("duration_ms").and_then(Value::as_u64).is_none() {
        return Err(format!("run report missing results or duration: {written}").into());
    }
    let transcript: Value = serde_json::from_str(&std::fs::read_to_string(transcript_path)?)?;
    let durations = transcript.as_array().map_or(0, |entries| {
        entries
            .iter()
            .filter(|entry| entry.get("duration_ms").and_then(Value::as_u64).is_some())
            .count()
    });
    if durations != 18 {
        return Err(format!("expected 18 timed transcript entries, saw {durations}").into());
    }
    Ok(())
}
