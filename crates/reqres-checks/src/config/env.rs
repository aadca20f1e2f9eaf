// crates/reqres-checks/src/config/env.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment-backed configuration for the contract checks.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and unknown literals fail
//! closed with the offending variable named in the error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Origin of the public reqres demo service.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Environment keys for suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEnv {
    /// Optional service origin override.
    BaseUrl,
    /// Optional API key sent as `x-api-key`.
    ApiKey,
    /// Optional request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact root override.
    RunRoot,
    /// Optional color sweep policy (`each-id` or `repeat-total`).
    ColorSweep,
    /// Optional exchange log target (`off`, `stderr`, or a file path).
    Log,
}

impl SuiteEnv {
    /// Every recognized key, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::BaseUrl,
        Self::ApiKey,
        Self::TimeoutSeconds,
        Self::RunRoot,
        Self::ColorSweep,
        Self::Log,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "REQRES_CHECKS_BASE_URL",
            Self::ApiKey => "REQRES_CHECKS_API_KEY",
            Self::TimeoutSeconds => "REQRES_CHECKS_TIMEOUT_SEC",
            Self::RunRoot => "REQRES_CHECKS_RUN_ROOT",
            Self::ColorSweep => "REQRES_CHECKS_COLOR_SWEEP",
            Self::Log => "REQRES_CHECKS_LOG",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration parsing errors.
///
/// # Invariants
/// - Every variant names the environment variable that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is set but not valid UTF-8.
    #[error("{0} must be valid UTF-8")]
    InvalidUtf8(String),
    /// Variable is set but empty or whitespace.
    #[error("{0} must not be empty")]
    Empty(String),
    /// Variable value failed validation.
    #[error("{name} {message}")]
    Invalid {
        /// Environment variable name.
        name: String,
        /// Validation failure detail.
        message: String,
    },
}

impl ConfigError {
    /// Builds an [`ConfigError::Invalid`] for the named variable.
    fn invalid(name: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Policy deciding which resource id the per-item color sweep fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSweep {
    /// Fetch id `i` on iteration `i`, covering every id in `[1, total]`.
    #[default]
    EachId,
    /// Fetch id `total` on every iteration, as the legacy suite did.
    RepeatTotal,
}

impl ColorSweep {
    /// Returns the configuration literal for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EachId => "each-id",
            Self::RepeatTotal => "repeat-total",
        }
    }

    /// Parses a configuration literal.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "each-id" => Some(Self::EachId),
            "repeat-total" => Some(Self::RepeatTotal),
            _ => None,
        }
    }

    /// Returns the resource id to fetch on iteration `index` of a sweep over `total`.
    #[must_use]
    pub const fn target_id(self, index: i64, total: i64) -> i64 {
        match self {
            Self::EachId => index,
            Self::RepeatTotal => total,
        }
    }
}

impl fmt::Display for ColorSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for the structured exchange log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Exchange logging disabled.
    #[default]
    Off,
    /// JSON lines written to stderr.
    Stderr,
    /// JSON lines appended to a file.
    File(PathBuf),
}

impl LogTarget {
    /// Parses a log target literal; anything other than `off`/`stderr` is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("off") {
            return Self::Off;
        }
        if trimmed.eq_ignore_ascii_case("stderr") {
            return Self::Stderr;
        }
        Self::File(PathBuf::from(trimmed))
    }
}

/// Typed suite configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Service origin, validated as an `http` or `https` URL.
    pub base_url: String,
    /// Optional API key sent as `x-api-key`.
    pub api_key: Option<String>,
    /// Optional request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// Optional artifact root override.
    pub run_root: Option<PathBuf>,
    /// Per-item color sweep policy.
    pub color_sweep: ColorSweep,
    /// Exchange log destination.
    pub log: LogTarget,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            run_root: None,
            color_sweep: ColorSweep::default(),
            log: LogTarget::default(),
        }
    }
}

impl SuiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is not valid UTF-8,
    /// is empty, or fails validation (for example, a zero timeout or an
    /// unknown sweep policy).
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = read_env_nonempty(SuiteEnv::BaseUrl.as_str())?
            .map(|value| parse_base_url(SuiteEnv::BaseUrl.as_str(), &value))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = read_env_nonempty(SuiteEnv::ApiKey.as_str())?
            .map(|value| value.trim().to_string());
        let timeout = read_env_nonempty(SuiteEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SuiteEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SuiteEnv::RunRoot.as_str())?.map(PathBuf::from);
        let color_sweep = read_env_nonempty(SuiteEnv::ColorSweep.as_str())?
            .map(|value| {
                ColorSweep::parse(&value).ok_or_else(|| {
                    ConfigError::invalid(
                        SuiteEnv::ColorSweep.as_str(),
                        "must be each-id or repeat-total",
                    )
                })
            })
            .transpose()?
            .unwrap_or_default();
        let log = read_env_nonempty(SuiteEnv::Log.as_str())?
            .map(|value| LogTarget::parse(&value))
            .unwrap_or_default();
        Ok(Self {
            base_url,
            api_key,
            timeout,
            run_root,
            color_sweep,
            log,
        })
    }

    /// Returns a copy pointed at a different service origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns a copy using the given color sweep policy.
    #[must_use]
    pub const fn with_color_sweep(mut self, color_sweep: ColorSweep) -> Self {
        self.color_sweep = color_sweep;
        self
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUtf8`] when the variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::InvalidUtf8(name.to_string()))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name.to_string())),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Validates a service origin and normalizes away a trailing slash.
///
/// # Errors
///
/// Returns an error when the value is not an absolute `http`/`https` URL.
fn parse_base_url(name: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|err| ConfigError::invalid(name, format!("must be an absolute URL: {err}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::invalid(name, "must use the http or https scheme"));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::invalid(name, "must include a host"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid(name, "must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| ConfigError::invalid(name, "must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(ConfigError::invalid(name, "must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
