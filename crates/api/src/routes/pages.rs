//! Route definitions for the public landing pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /       -> home (tutor roster)
/// GET /about  -> tutor bios
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
}
