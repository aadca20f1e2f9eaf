// crates/reqres-checks/src/client.rs
// ============================================================================
// Module: Reqres HTTP Client
// Description: Async HTTP client for the reqres demo service.
// Purpose: Issue the suite's fixed calls with transcripts and exchange logs.
// Dependencies: reqwest, rustls, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! [`ReqresClient`] wraps a `reqwest` client bound to one service origin.
//! Each call records an [`ExchangeRecord`] in a shared transcript and emits an
//! [`ExchangeEvent`] to the configured sink.
//! Invariants:
//! - Sends are never retried; a transport failure surfaces immediately.
//! - Non-JSON or empty response bodies decode to `null` with the raw text kept.
//! - No timeout is set unless the configuration provides one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Instant;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::audit::ExchangeEvent;
use crate::audit::ExchangeLogSink;
use crate::audit::elapsed_millis;
use crate::audit::sink_for_target;
use crate::config::SuiteConfig;
use crate::expect::CheckError;
use crate::models::RegistrationRequest;
use crate::models::UserUpdateRequest;

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Registration endpoint.
pub const REGISTER_PATH: &str = "/api/register";
/// Color collection endpoint; single resources live under `/{id}`.
pub const COLORS_PATH: &str = "/api/unknown";
/// User collection endpoint; single users live under `/{id}`.
pub const USERS_PATH: &str = "/api/users";
/// Header carrying the service API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Returns the path of a single color resource.
#[must_use]
pub fn color_path(id: i64) -> String {
    format!("{COLORS_PATH}/{id}")
}

/// Returns the path of a single user.
#[must_use]
pub fn user_path(id: u64) -> String {
    format!("{USERS_PATH}/{id}")
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Client construction errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL failed to parse.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// API key is not a valid header value.
    #[error("invalid api key header value: {0}")]
    InvalidApiKey(String),
    /// Underlying HTTP client failed to build.
    #[error("failed to build http client: {0}")]
    Build(String),
    /// Exchange log sink failed to open.
    #[error("failed to open exchange log: {0}")]
    LogSink(String),
}

/// Status and decoded body of one HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Method and path of the call (`POST /api/register`).
    pub endpoint: String,
    /// HTTP status code.
    pub status: u16,
    /// JSON body, or `null` when empty or not JSON.
    pub body: Value,
    /// Raw body text.
    pub raw: String,
}

/// One transcript entry per HTTP exchange, in send order.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRecord {
    /// 1-based position in the transcript.
    pub sequence: u64,
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
    /// Decoded response body (`null` when absent).
    pub response_body: Value,
    /// Wall-clock duration of the exchange.
    pub duration_ms: u64,
    /// Transport error detail when the exchange failed.
    pub error: Option<String>,
}

/// HTTP client for the reqres demo service.
#[derive(Clone)]
pub struct ReqresClient {
    /// Service origin without a trailing slash.
    base_url: String,
    /// Underlying HTTP client.
    client: Client,
    /// Optional `x-api-key` value.
    api_key: Option<HeaderValue>,
    /// Scenario label stamped on transcript entries and log events.
    scenario: Option<String>,
    /// Shared transcript of every exchange.
    transcript: Arc<Mutex<Vec<ExchangeRecord>>>,
    /// Exchange log sink.
    log: Arc<dyn ExchangeLogSink>,
}

impl ReqresClient {
    /// Creates a client from the suite configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the base URL or API key is invalid, the
    /// HTTP client cannot be built, or the exchange log cannot be opened.
    pub fn new(config: &SuiteConfig) -> Result<Self, ClientError> {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        let api_key = config
            .api_key
            .as_deref()
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|err| ClientError::InvalidApiKey(err.to_string()))?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| ClientError::Build(err.to_string()))?;
        let log =
            sink_for_target(&config.log).map_err(|err| ClientError::LogSink(err.to_string()))?;
        Ok(Self {
            base_url,
            client,
            api_key,
            scenario: None,
            transcript: Arc::new(Mutex::new(Vec::new())),
            log,
        })
    }

    /// Replaces the exchange log sink.
    #[must_use]
    pub fn with_log_sink(mut self, log: Arc<dyn ExchangeLogSink>) -> Self {
        self.log = log;
        self
    }

    /// Returns a handle that labels its exchanges with `scenario`.
    ///
    /// The handle shares the transcript and connection pool with `self`.
    #[must_use]
    pub fn for_scenario(&self, scenario: &str) -> Self {
        let mut scoped = self.clone();
        scoped.scenario = Some(scenario.to_string());
        scoped
    }

    /// Returns the service origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<ExchangeRecord> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Issues `POST /api/register`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Encode`] or [`CheckError::Transport`].
    pub async fn register(&self, request: &RegistrationRequest) -> Result<ApiResponse, CheckError> {
        let body = encode(request)?;
        self.send(Method::POST, REGISTER_PATH, Some(body)).await
    }

    /// Issues `GET /api/unknown`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Transport`] on network failure.
    pub async fn list_colors(&self) -> Result<ApiResponse, CheckError> {
        self.send(Method::GET, COLORS_PATH, None).await
    }

    /// Issues `GET /api/unknown/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Transport`] on network failure.
    pub async fn color(&self, id: i64) -> Result<ApiResponse, CheckError> {
        self.send(Method::GET, &color_path(id), None).await
    }

    /// Issues `PUT /api/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Encode`] or [`CheckError::Transport`].
    pub async fn update_user(
        &self,
        id: u64,
        request: &UserUpdateRequest,
    ) -> Result<ApiResponse, CheckError> {
        let body = encode(request)?;
        self.send(Method::PUT, &user_path(id), Some(body)).await
    }

    /// Sends one request and records the exchange.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, CheckError> {
        let endpoint = format!("{method} {path}");
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method.clone(), url.as_str());
        if let Some(body) = &body {
            request = request.json(body);
        }
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key.clone());
        }

        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let message = format!("{endpoint}: {err}");
                self.record(Exchange {
                    method: &method,
                    url: &url,
                    request_body: body,
                    started,
                    response: None,
                    error: Some(message.clone()),
                });
                return Err(CheckError::Transport(message));
            }
        };
        let status = response.status().as_u16();
        let raw = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                let message = format!("{endpoint}: failed to read response: {err}");
                self.record(Exchange {
                    method: &method,
                    url: &url,
                    request_body: body,
                    started,
                    response: None,
                    error: Some(message.clone()),
                });
                return Err(CheckError::Transport(message));
            }
        };
        let parsed = parse_body(&raw);
        self.record(Exchange {
            method: &method,
            url: &url,
            request_body: body,
            started,
            response: Some((status, parsed.clone())),
            error: None,
        });
        Ok(ApiResponse {
            endpoint,
            status,
            body: parsed,
            raw,
        })
    }

    /// Appends a transcript entry and emits the matching log event.
    fn record(&self, exchange: Exchange<'_>) {
        let duration_ms = elapsed_millis(exchange.started);
        let (status, response_body) = exchange
            .response
            .map_or((None, Value::Null), |(status, body)| (Some(status), body));

        let mut event = ExchangeEvent::http_exchange(exchange.method.as_str(), exchange.url);
        event.scenario.clone_from(&self.scenario);
        event.request_body.clone_from(&exchange.request_body);
        event.status = status;
        event.response_body = status.map(|_| response_body.clone());
        event.duration_ms = duration_ms;
        event.error.clone_from(&exchange.error);
        self.log.record(&event);

        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(ExchangeRecord {
            sequence,
            scenario: self.scenario.clone(),
            method: exchange.method.to_string(),
            url: exchange.url.to_string(),
            request_body: exchange.request_body,
            status,
            response_body,
            duration_ms,
            error: exchange.error,
        });
    }
}

/// Inputs for one transcript entry.
struct Exchange<'a> {
    /// HTTP method.
    method: &'a Method,
    /// Fully resolved request URL.
    url: &'a str,
    /// JSON request body when one was sent.
    request_body: Option<Value>,
    /// Send start time.
    started: Instant,
    /// Status and decoded body when a response arrived.
    response: Option<(u16, Value)>,
    /// Transport error detail.
    error: Option<String>,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serializes a request model into a JSON value.
fn encode<T: Serialize>(value: &T) -> Result<Value, CheckError> {
    serde_json::to_value(value).map_err(|err| CheckError::Encode(err.to_string()))
}

/// Decodes a response body, mapping empty or non-JSON text to `null`.
fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
