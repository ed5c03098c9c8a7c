use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// No other cross-request state exists; the database is the only shared
/// mutable resource.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tutormatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
