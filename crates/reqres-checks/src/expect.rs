// crates/reqres-checks/src/expect.rs
// ============================================================================
// Module: Response Expectations
// Description: Assertion taxonomy and JSON field checks for API responses.
// Purpose: Turn status and body deviations into typed check failures.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Checks address JSON fields by dotted path (`data.pantone_value`). A field
//! that is absent or `null` is [`CheckError::FieldMissing`]; a field of the
//! wrong JSON type is [`CheckError::TypeMismatch`]; a field that differs from
//! an expected literal is [`CheckError::ValueMismatch`]. Literal comparisons
//! are exact, never substring.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::client::ApiResponse;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure raised by a contract check.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - The first failure aborts the scenario that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Actual HTTP status differs from the expected one.
    #[error("{endpoint}: expected status {expected}, got {actual}")]
    StatusMismatch {
        /// Method and path of the failing call.
        endpoint: String,
        /// Expected status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
    },
    /// Expected JSON field is absent or null.
    #[error("field `{field}` is missing or null")]
    FieldMissing {
        /// Dotted field path.
        field: String,
    },
    /// Field is present but differs from the expected literal.
    #[error("field `{field}`: expected {expected}, got {actual}")]
    ValueMismatch {
        /// Dotted field path.
        field: String,
        /// Expected value, rendered as JSON.
        expected: String,
        /// Observed value, rendered as JSON.
        actual: String,
    },
    /// Field is present but has the wrong JSON type.
    #[error("field `{field}` must be {expected}, got {actual}")]
    TypeMismatch {
        /// Dotted field path.
        field: String,
        /// Expected JSON type name.
        expected: &'static str,
        /// Observed value, rendered as JSON.
        actual: String,
    },
    /// Network-level failure (DNS, connect, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// Field passed shape checks but did not decode into its typed model.
    #[error("decode `{field}`: {message}")]
    Decode {
        /// Dotted field path (empty for the whole body).
        field: String,
        /// Decoder message.
        message: String,
    },
}

impl CheckError {
    /// Returns a stable label for the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StatusMismatch {
                ..
            } => "status_mismatch",
            Self::FieldMissing {
                ..
            } => "field_missing",
            Self::ValueMismatch {
                ..
            } => "value_mismatch",
            Self::TypeMismatch {
                ..
            } => "type_mismatch",
            Self::Transport(_) => "transport",
            Self::Encode(_) => "encode",
            Self::Decode {
                ..
            } => "decode",
        }
    }

    /// Builds a [`CheckError::FieldMissing`] for the path.
    fn missing(field: &str) -> Self {
        Self::FieldMissing {
            field: field.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Status Checks
// ============================================================================

/// Asserts the response carries the expected status code.
///
/// # Errors
///
/// Returns [`CheckError::StatusMismatch`] when the codes differ.
pub fn expect_status(response: &ApiResponse, expected: u16) -> Result<(), CheckError> {
    if response.status == expected {
        return Ok(());
    }
    Err(CheckError::StatusMismatch {
        endpoint: response.endpoint.clone(),
        expected,
        actual: response.status,
    })
}

// ============================================================================
// SECTION: Field Checks
// ============================================================================

/// Resolves a dotted path, treating `null` the same as absent.
///
/// Numeric segments index into arrays (`data.0.id`).
#[must_use]
pub fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = body;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    if current.is_null() { None } else { Some(current) }
}

/// Requires a non-null field of any type.
///
/// # Errors
///
/// Returns [`CheckError::FieldMissing`] when the field is absent or null.
pub fn require_present<'a>(body: &'a Value, path: &str) -> Result<&'a Value, CheckError> {
    lookup(body, path).ok_or_else(|| CheckError::missing(path))
}

/// Requires a non-null integer field.
///
/// # Errors
///
/// Returns [`CheckError::FieldMissing`] when absent or null and
/// [`CheckError::TypeMismatch`] when not an integer.
pub fn require_i64(body: &Value, path: &str) -> Result<i64, CheckError> {
    let value = require_present(body, path)?;
    value.as_i64().ok_or_else(|| CheckError::TypeMismatch {
        field: path.to_string(),
        expected: "an integer",
        actual: value.to_string(),
    })
}

/// Requires a non-null string field.
///
/// # Errors
///
/// Returns [`CheckError::FieldMissing`] when absent or null and
/// [`CheckError::TypeMismatch`] when not a string.
pub fn require_str<'a>(body: &'a Value, path: &str) -> Result<&'a str, CheckError> {
    let value = require_present(body, path)?;
    value.as_str().ok_or_else(|| CheckError::TypeMismatch {
        field: path.to_string(),
        expected: "a string",
        actual: value.to_string(),
    })
}

/// Requires a string field exactly equal to `expected`.
///
/// # Errors
///
/// Returns the [`require_str`] errors, or [`CheckError::ValueMismatch`] when
/// the string differs in any way (case and whitespace included).
pub fn expect_str_eq(body: &Value, path: &str, expected: &str) -> Result<(), CheckError> {
    let actual = require_str(body, path)?;
    if actual == expected {
        return Ok(());
    }
    Err(CheckError::ValueMismatch {
        field: path.to_string(),
        expected: Value::from(expected).to_string(),
        actual: Value::from(actual).to_string(),
    })
}

/// Decodes a field (or the whole body when `path` is empty) into a typed model.
///
/// # Errors
///
/// Returns [`CheckError::FieldMissing`] when the path does not resolve and
/// [`CheckError::Decode`] when the value does not fit `T`.
pub fn decode<T: DeserializeOwned>(body: &Value, path: &str) -> Result<T, CheckError> {
    let value = if path.is_empty() { body } else { require_present(body, path)? };
    T::deserialize(value).map_err(|err| CheckError::Decode {
        field: path.to_string(),
        message: err.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
