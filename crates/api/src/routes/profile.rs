//! Route definitions for login and the profile view.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// ```text
/// GET  /login         -> login form descriptor
/// POST /view_profile  -> authenticate, return joined profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(profile::login_form))
        .route("/view_profile", post(profile::view_profile))
}
