// crates/reqres-checks/src/scenarios.rs
// ============================================================================
// Module: Contract Scenarios
// Description: The five request/response checks against the demo service.
// Purpose: Define each scenario as one sequential async function.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each scenario issues its requests in order, asserts on status and body
//! shape, and returns either a [`ScenarioOutcome`] or the first
//! [`CheckError`] it hit. Scenarios share no state beyond the client.
//!
//! The color scenarios derive their targets from the listing's `total`: the
//! per-item sweep visits ids according to [`ColorSweep`], and the not-found
//! check targets exactly `total + 1`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

use crate::client::ReqresClient;
use crate::config::ColorSweep;
use crate::expect::CheckError;
use crate::expect::decode;
use crate::expect::expect_status;
use crate::expect::expect_str_eq;
use crate::expect::require_i64;
use crate::expect::require_str;
use crate::models::ColorEnvelope;
use crate::models::ColorResource;
use crate::models::RegistrationRequest;
use crate::models::RegistrationResponse;
use crate::models::UserUpdateRequest;
use crate::models::UserUpdateResponse;

// ============================================================================
// SECTION: Fixed Inputs
// ============================================================================

/// Email of a user the demo service accepts for registration.
pub const REGISTER_EMAIL: &str = "eve.holt@reqres.in";
/// Password paired with [`REGISTER_EMAIL`].
pub const REGISTER_PASSWORD: &str = "cityslicka";
/// Exact error text returned when the password is omitted.
pub const MISSING_PASSWORD_ERROR: &str = "Missing password";
/// Existing user targeted by the update scenario.
pub const UPDATE_USER_ID: u64 = 2;
/// Name sent by the update scenario.
pub const UPDATE_NAME: &str = "morpheus";
/// Job sent by the update scenario.
pub const UPDATE_JOB: &str = "zion resident";

// ============================================================================
// SECTION: Catalogue
// ============================================================================

/// The contract scenarios, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Valid registration returns an id and token.
    RegisterSuccess,
    /// Registration without a password is rejected with a fixed message.
    RegisterMissingPassword,
    /// Every color resource exposes all five fields.
    ColorFieldsComplete,
    /// The id just past the listing's total is not found.
    UnknownColorNotFound,
    /// Updating a user echoes the request and stamps `updatedAt`.
    UpdateUser,
}

impl Scenario {
    /// All scenarios in execution order.
    pub const ALL: [Self; 5] = [
        Self::RegisterSuccess,
        Self::RegisterMissingPassword,
        Self::ColorFieldsComplete,
        Self::UnknownColorNotFound,
        Self::UpdateUser,
    ];

    /// Returns the stable snake_case identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::RegisterSuccess => "register_success",
            Self::RegisterMissingPassword => "register_missing_password",
            Self::ColorFieldsComplete => "color_fields_complete",
            Self::UnknownColorNotFound => "unknown_color_not_found",
            Self::UpdateUser => "update_user",
        }
    }

    /// Returns the human-readable title used in reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RegisterSuccess => "Successful user registration",
            Self::RegisterMissingPassword => "Error text for registration without a password",
            Self::ColorFieldsComplete => "Every color has all fields populated",
            Self::UnknownColorNotFound => "Status 404 for a nonexistent color",
            Self::UpdateUser => "Successful user update via PUT",
        }
    }

    /// Returns a one-sentence description used in reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RegisterSuccess => {
                "POST /api/register with email and password returns 200 with a non-null id and token."
            }
            Self::RegisterMissingPassword => {
                "POST /api/register with only an email returns 400 and the error \"Missing password\"."
            }
            Self::ColorFieldsComplete => {
                "GET /api/unknown reports a total, and each color fetched up to that total has id, name, year, color and pantone_value."
            }
            Self::UnknownColorNotFound => {
                "GET /api/unknown/{total + 1} returns 404."
            }
            Self::UpdateUser => {
                "PUT /api/users/2 echoes name and job and returns a non-null updatedAt."
            }
        }
    }

    /// Runs the scenario against the service.
    ///
    /// # Errors
    ///
    /// Returns the first [`CheckError`] raised by the scenario.
    pub async fn run(
        self,
        client: &ReqresClient,
        sweep: ColorSweep,
    ) -> Result<ScenarioOutcome, CheckError> {
        match self {
            Self::RegisterSuccess => register_success(client).await,
            Self::RegisterMissingPassword => register_missing_password(client).await,
            Self::ColorFieldsComplete => color_fields_complete(client, sweep).await,
            Self::UnknownColorNotFound => unknown_color_not_found(client).await,
            Self::UpdateUser => update_user(client).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Successful scenario result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioOutcome {
    /// Observations worth keeping in the report.
    pub notes: Vec<String>,
}

impl ScenarioOutcome {
    /// Builds an outcome with a single note.
    fn note(note: impl Into<String>) -> Self {
        Self {
            notes: vec![note.into()],
        }
    }
}

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers a known user and requires an id and token.
///
/// # Errors
///
/// Returns [`CheckError`] on a non-200 status or a missing/mistyped field.
pub async fn register_success(client: &ReqresClient) -> Result<ScenarioOutcome, CheckError> {
    let request = RegistrationRequest::new(REGISTER_EMAIL, REGISTER_PASSWORD);
    let response = client.register(&request).await?;
    expect_status(&response, 200)?;
    require_i64(&response.body, "id")?;
    require_str(&response.body, "token")?;
    let registered: RegistrationResponse = decode(&response.body, "")?;
    let id = registered.id.unwrap_or_default();
    Ok(ScenarioOutcome::note(format!("registration returned id {id} with a token")))
}

/// Registers without a password and requires the exact rejection message.
///
/// # Errors
///
/// Returns [`CheckError`] on a non-400 status or a different error text.
pub async fn register_missing_password(
    client: &ReqresClient,
) -> Result<ScenarioOutcome, CheckError> {
    let request = RegistrationRequest::email_only(REGISTER_EMAIL);
    let response = client.register(&request).await?;
    expect_status(&response, 400)?;
    expect_str_eq(&response.body, "error", MISSING_PASSWORD_ERROR)?;
    let rejected: RegistrationResponse = decode(&response.body, "")?;
    if let Some(token) = rejected.token {
        return Err(CheckError::ValueMismatch {
            field: "token".to_string(),
            expected: "absent on rejection".to_string(),
            actual: Value::from(token).to_string(),
        });
    }
    Ok(ScenarioOutcome::note(format!("rejected with \"{MISSING_PASSWORD_ERROR}\"")))
}

// ============================================================================
// SECTION: Colors
// ============================================================================

/// Reads the listing and returns its `total`.
///
/// # Errors
///
/// Returns [`CheckError`] on a non-200 status, a missing or non-integer
/// `total`, or a negative `total`.
pub async fn fetch_total(client: &ReqresClient) -> Result<i64, CheckError> {
    let response = client.list_colors().await?;
    expect_status(&response, 200)?;
    let total = require_i64(&response.body, "total")?;
    if total < 0 {
        return Err(CheckError::ValueMismatch {
            field: "total".to_string(),
            expected: "a non-negative integer".to_string(),
            actual: total.to_string(),
        });
    }
    Ok(total)
}

/// Requires all five color fields to be present and correctly typed.
///
/// # Errors
///
/// Returns [`CheckError`] for the first missing or mistyped field.
pub fn check_color_fields(body: &Value) -> Result<ColorResource, CheckError> {
    require_i64(body, "data.id")?;
    require_str(body, "data.name")?;
    require_i64(body, "data.year")?;
    require_str(body, "data.color")?;
    require_str(body, "data.pantone_value")?;
    let envelope: ColorEnvelope = decode(body, "")?;
    Ok(envelope.data)
}

/// Fetches one color per index in `1..=total` and checks its fields.
///
/// # Errors
///
/// Returns [`CheckError`] for the listing call or the first failing fetch.
pub async fn color_fields_complete(
    client: &ReqresClient,
    sweep: ColorSweep,
) -> Result<ScenarioOutcome, CheckError> {
    let total = fetch_total(client).await?;
    let mut checked = Vec::new();
    for index in 1..=total {
        let id = sweep.target_id(index, total);
        let response = client.color(id).await?;
        expect_status(&response, 200)?;
        let color = check_color_fields(&response.body)?;
        checked.push(color.id.to_string());
    }
    let mut outcome =
        ScenarioOutcome::note(format!("listing total {total}, sweep policy {sweep}"));
    outcome.notes.push(format!("checked color ids [{}]", checked.join(", ")));
    Ok(outcome)
}

/// Fetches the id just past the listing's total and requires a 404.
///
/// # Errors
///
/// Returns [`CheckError`] for the listing call or a non-404 lookup.
pub async fn unknown_color_not_found(
    client: &ReqresClient,
) -> Result<ScenarioOutcome, CheckError> {
    let total = fetch_total(client).await?;
    let missing_id = total.checked_add(1).ok_or_else(|| CheckError::ValueMismatch {
        field: "total".to_string(),
        expected: "a total below i64::MAX".to_string(),
        actual: total.to_string(),
    })?;
    let response = client.color(missing_id).await?;
    expect_status(&response, 404)?;
    Ok(ScenarioOutcome::note(format!("id {missing_id} is not found")))
}

// ============================================================================
// SECTION: Users
// ============================================================================

/// Updates user 2 and requires echoed fields plus `updatedAt`.
///
/// # Errors
///
/// Returns [`CheckError`] on a non-200 status, an echo mismatch, or a
/// missing `updatedAt`.
pub async fn update_user(client: &ReqresClient) -> Result<ScenarioOutcome, CheckError> {
    let request = UserUpdateRequest::new(UPDATE_NAME, UPDATE_JOB);
    let response = client.update_user(UPDATE_USER_ID, &request).await?;
    expect_status(&response, 200)?;
    expect_str_eq(&response.body, "name", &request.name)?;
    expect_str_eq(&response.body, "job", &request.job)?;
    require_str(&response.body, "updatedAt")?;
    let updated: UserUpdateResponse = decode(&response.body, "")?;
    Ok(ScenarioOutcome::note(format!(
        "user {UPDATE_USER_ID} updated at {}",
        updated.updated_at
    )))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
