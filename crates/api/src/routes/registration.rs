//! Route definitions for the registration wizard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Wizard routes, one path per step.
///
/// ```text
/// GET  /account -> step 1 form descriptor
/// GET  /class   -> course options
/// POST /class   -> submit account step
/// GET  /quiz    -> tutor/trait picker data
/// POST /quiz    -> submit class step
/// POST /final   -> submit quiz step, commit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/account", get(registration::account_form))
        .route(
            "/class",
            get(registration::class_options).post(registration::submit_account),
        )
        .route(
            "/quiz",
            get(registration::quiz_options).post(registration::submit_class),
        )
        .route("/final", post(registration::submit_final))
}
