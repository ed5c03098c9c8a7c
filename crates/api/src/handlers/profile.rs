//! Handlers for login and the profile view.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tutormatch_core::error::CoreError;
use tutormatch_db::models::profile::StudentProfile;
use tutormatch_db::repositories::StudentRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The single login failure message. Unknown-username and wrong-password
/// cases are deliberately indistinguishable to avoid username enumeration.
const LOGIN_FAILED: &str = "Invalid username or password.";

/// Response for `GET /login`: the login form descriptor.
#[derive(Debug, Serialize)]
pub struct LoginFormResponse {
    pub required_fields: &'static [&'static str],
}

/// Request body for `POST /view_profile`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn login_form() -> Json<LoginFormResponse> {
    Json(LoginFormResponse {
        required_fields: &["username", "password"],
    })
}

/// POST /view_profile
///
/// Authenticate with username + password and return the joined profile
/// (student fields plus course and tutor names).
pub async fn view_profile(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<StudentProfile>> {
    let student = StudentRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_FAILED.to_string())))?;

    let password_valid = verify_password(&input.password, &student.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            LOGIN_FAILED.to_string(),
        )));
    }

    let profile = StudentRepo::profile_by_username(&state.pool, &student.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_FAILED.to_string())))?;

    Ok(Json(profile))
}
