pub mod health;
pub mod pages;
pub mod profile;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /                 GET   landing page, lists tutors with traits
/// /about            GET   tutor bios
///
/// /account          GET   registration step 1 form descriptor
/// /class            GET   course/time options
/// /class            POST  submit step 1, issue state token
/// /quiz             GET   tutor/trait picker data
/// /quiz             POST  submit step 2, advance state token
/// /final            POST  submit step 3, commit the student row
///
/// /login            GET   login form descriptor
/// /view_profile     POST  authenticate, return joined profile
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(registration::router())
        .merge(profile::router())
}
