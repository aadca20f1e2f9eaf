// crates/reqres-checks/src/audit.rs
// ============================================================================
// Module: Exchange Logging
// Description: Structured events for every HTTP exchange the suite issues.
// Purpose: Emit JSON-lines request/response logs without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every request the client sends produces one [`ExchangeEvent`] carrying the
//! URL, request body, status, and response body. Sinks serialize each event
//! as a single JSON line. Sink failures are swallowed: logging never changes
//! the outcome of a scenario.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde_json::Value;

use crate::config::LogTarget;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Exchange log event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u64,
    /// Scenario label when the client is scoped to one.
    pub scenario: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Fully resolved request URL.
    pub url: String,
    /// JSON request body when one was sent.
    pub request_body: Option<Value>,
    /// Response status when a response arrived.
    pub status: Option<u16>,
    /// Parsed response body when a response arrived.
    pub response_body: Option<Value>,
    /// Wall-clock duration of the exchange.
    pub duration_ms: u64,
    /// Transport error detail when the exchange failed.
    pub error: Option<String>,
}

impl ExchangeEvent {
    /// Builds an `http_exchange` event stamped with the current time.
    #[must_use]
    pub fn http_exchange(method: &str, url: &str) -> Self {
        Self {
            event: "http_exchange",
            timestamp_ms: now_millis(),
            scenario: None,
            method: method.to_string(),
            url: url.to_string(),
            request_body: None,
            status: None,
            response_body: None,
            duration_ms: 0,
            error: None,
        }
    }
}

/// Returns the current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> u64 {
    duration_millis(SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default())
}

/// Returns the milliseconds elapsed since `started`.
#[must_use]
pub fn elapsed_millis(started: Instant) -> u64 {
    duration_millis(started.elapsed())
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Sink for exchange log events.
pub trait ExchangeLogSink: Send + Sync {
    /// Records an exchange event.
    fn record(&self, event: &ExchangeEvent);
}

/// Exchange sink that logs JSON lines to stderr.
pub struct StderrExchangeLog;

impl ExchangeLogSink for StderrExchangeLog {
    fn record(&self, event: &ExchangeEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Exchange sink that appends JSON lines to a file.
pub struct FileExchangeLog {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileExchangeLog {
    /// Opens (or creates) the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file or its parent directory cannot be created.
    pub fn new(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ExchangeLogSink for FileExchangeLog {
    fn record(&self, event: &ExchangeEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
        }
    }
}

/// No-op exchange sink.
pub struct NoopExchangeLog;

impl ExchangeLogSink for NoopExchangeLog {
    fn record(&self, _event: &ExchangeEvent) {}
}

/// Builds the sink selected by a [`LogTarget`].
///
/// # Errors
///
/// Returns an I/O error when a file target cannot be opened.
pub fn sink_for_target(target: &LogTarget) -> io::Result<Arc<dyn ExchangeLogSink>> {
    Ok(match target {
        LogTarget::Off => Arc::new(NoopExchangeLog),
        LogTarget::Stderr => Arc::new(StderrExchangeLog),
        LogTarget::File(path) => Arc::new(FileExchangeLog::new(path)?),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
