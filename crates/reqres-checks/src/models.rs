// crates/reqres-checks/src/models.rs
// ============================================================================
// Module: Wire Models
// Description: Request and response payloads for the reqres demo service.
// Purpose: Give every exchanged JSON body a typed shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Payload types are transient per-request values. Response types keep every
//! server-populated field optional where the service may omit it, so shape
//! checks in [`crate::expect`] decide pass or fail rather than the decoder.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Body for `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Account email.
    pub email: String,
    /// Account password; omitted from the body when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RegistrationRequest {
    /// Builds a complete registration request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Builds a registration request carrying only the email.
    #[must_use]
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
        }
    }
}

/// Response from `POST /api/register`.
///
/// # Invariants
/// - Either `id` and `token` are set (success) or `error` is set (failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistrationResponse {
    /// Assigned user id on success.
    #[serde(default)]
    pub id: Option<i64>,
    /// Session token on success.
    #[serde(default)]
    pub token: Option<String>,
    /// Failure message on rejection.
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Colors
// ============================================================================

/// One color resource served under `/api/unknown/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorResource {
    /// Resource id.
    pub id: i64,
    /// Color name.
    pub name: String,
    /// Year the color was introduced.
    pub year: i64,
    /// Hex color value.
    pub color: String,
    /// Pantone reference.
    pub pantone_value: String,
}

/// Wrapper around a single color resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEnvelope {
    /// Wrapped resource.
    pub data: ColorResource,
}

/// Collection summary served under `/api/unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ColorListSummary {
    /// Total number of color resources.
    pub total: i64,
    /// Current page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    /// Number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    /// Resources on the current page.
    #[serde(default)]
    pub data: Vec<ColorResource>,
}

// ============================================================================
// SECTION: Users
// ============================================================================

/// Body for `PUT /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    /// New display name.
    pub name: String,
    /// New job title.
    pub job: String,
}

impl UserUpdateRequest {
    /// Builds an update request.
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Response from `PUT /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    /// Echoed display name.
    pub name: String,
    /// Echoed job title.
    pub job: String,
    /// Server-generated update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
