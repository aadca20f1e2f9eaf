// crates/reqres-checks/src/report.rs
// ============================================================================
// Module: Test Artifacts
// Description: Artifact helpers for contract-check runs.
// Purpose: Create per-test run roots and write deterministic summaries.
// Dependencies: serde, serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! Every test gets an artifact root holding `summary.json` (canonical JSON),
//! `summary.md`, and whatever the test adds (typically `transcript.json`).
//! [`TestReporter`] writes a summary even when the test panics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::audit::now_millis;
use crate::config::SuiteConfig;
use crate::scenarios::Scenario;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Artifact write errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure.
    #[error("artifact io failure: {0}")]
    Io(#[from] io::Error),
    /// Canonical JSON serialization failure.
    #[error("artifact serialization failure: {0}")]
    Serialize(String),
}

/// Summary persisted for one test.
#[derive(Debug, Serialize)]
struct TestSummary {
    /// Test identifier.
    test_name: String,
    /// Human-readable title.
    display_name: Option<String>,
    /// One-sentence description.
    description: Option<String>,
    /// Final status label.
    status: String,
    /// Start time (milliseconds since epoch).
    started_at_ms: u64,
    /// End time (milliseconds since epoch).
    ended_at_ms: u64,
    /// Wall-clock duration.
    duration_ms: u64,
    /// Free-form notes.
    notes: Vec<String>,
    /// Artifact file names relative to the root.
    artifacts: Vec<String>,
}

/// Returns the default artifact root for a test.
fn default_run_root(test_name: &str) -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/reqres-checks").join(format!("run_{stamp}")).join(test_name)
}

// ============================================================================
// SECTION: Artifacts
// ============================================================================

/// Artifact manager for a single test.
#[derive(Debug, Clone)]
pub struct TestArtifacts {
    /// Artifact root directory.
    root: PathBuf,
}

impl TestArtifacts {
    /// Creates the artifact root for a test, honoring the configured run root.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the directory cannot be created.
    pub fn new(config: &SuiteConfig, test_name: &str) -> Result<Self, ReportError> {
        let root = config
            .run_root
            .as_ref()
            .map_or_else(|| default_run_root(test_name), |root| root.join(test_name));
        Self::at(root)
    }

    /// Creates an artifact manager rooted at an explicit directory.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the directory cannot be created.
    pub fn at(root: PathBuf) -> Result<Self, ReportError> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Returns the root directory for the test artifacts.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] on serialization or write failure.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<PathBuf, ReportError> {
        let path = self.root.join(name);
        let bytes =
            serde_jcs::to_vec(value).map_err(|err| ReportError::Serialize(err.to_string()))?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Writes a text artifact with UTF-8 encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] on write failure.
    pub fn write_text(&self, name: &str, value: &str) -> Result<PathBuf, ReportError> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        Ok(path)
    }
}

// ============================================================================
// SECTION: Reporter
// ============================================================================

/// Helper that writes summaries even when a test panics.
pub struct TestReporter {
    /// Artifact manager.
    artifacts: TestArtifacts,
    /// Test identifier.
    test_name: String,
    /// Human-readable title.
    display_name: Option<String>,
    /// One-sentence description.
    description: Option<String>,
    /// Start time (milliseconds since epoch).
    started_at_ms: u64,
    /// Whether a summary has been written.
    finalized: bool,
}

impl TestReporter {
    /// Creates a reporter for the named test.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the artifact root cannot be created.
    pub fn new(config: &SuiteConfig, test_name: &str) -> Result<Self, ReportError> {
        Ok(Self::with_artifacts(TestArtifacts::new(config, test_name)?, test_name))
    }

    /// Creates a reporter titled and described after a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the artifact root cannot be created.
    pub fn for_scenario(config: &SuiteConfig, scenario: Scenario) -> Result<Self, ReportError> {
        let mut reporter = Self::new(config, scenario.id())?;
        reporter.display_name = Some(scenario.display_name().to_string());
        reporter.description = Some(scenario.description().to_string());
        Ok(reporter)
    }

    /// Creates a reporter over an existing artifact manager.
    #[must_use]
    pub fn with_artifacts(artifacts: TestArtifacts, test_name: &str) -> Self {
        Self {
            artifacts,
            test_name: test_name.to_string(),
            display_name: None,
            description: None,
            started_at_ms: now_millis(),
            finalized: false,
        }
    }

    /// Returns the artifact manager.
    #[must_use]
    pub const fn artifacts(&self) -> &TestArtifacts {
        &self.artifacts
    }

    /// Writes the final summary for the test.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when a summary file cannot be written.
    pub fn finish(
        &mut self,
        status: &str,
        notes: Vec<String>,
        artifacts: Vec<String>,
    ) -> Result<(), ReportError> {
        let ended_at_ms = now_millis();
        let summary = TestSummary {
            test_name: self.test_name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            status: status.to_string(),
            started_at_ms: self.started_at_ms,
            ended_at_ms,
            duration_ms: ended_at_ms.saturating_sub(self.started_at_ms),
            notes,
            artifacts,
        };
        self.artifacts.write_json("summary.json", &summary)?;
        self.artifacts.write_text("summary.md", &summary_markdown(&summary))?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "unknown" };
        let _ = self.finish(
            status,
            vec!["test terminated without explicit summary".to_string()],
            Vec::new(),
        );
    }
}

/// Renders the Markdown form of a summary.
fn summary_markdown(summary: &TestSummary) -> String {
    let mut out = String::new();
    out.push_str("# Contract-Check Summary\n\n");
    if let Some(display_name) = &summary.display_name {
        let _ = writeln!(out, "**{display_name}**\n");
    }
    if let Some(description) = &summary.description {
        let _ = writeln!(out, "{description}\n");
    }
    out.push_str("## Status\n\n");
    let _ = writeln!(out, "- Test: {}", summary.test_name);
    let _ = writeln!(out, "- Status: {}", summary.status);
    let _ = writeln!(out, "- Duration (ms): {}", summary.duration_ms);
    out.push_str("\n## Notes\n\n");
    push_list(&mut out, &summary.notes);
    out.push_str("\n## Artifacts\n\n");
    push_list(&mut out, &summary.artifacts);
    out
}

/// Appends a Markdown bullet list, or `- None` when empty.
fn push_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("- None\n");
        return;
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
