//! SQLite persistence layer for TutorMatch.
//!
//! Provides pool construction, a health check, the idempotent schema
//! bootstrap, typed row models, and repositories.

pub mod bootstrap;
pub mod models;
pub mod repositories;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Open (creating if necessary) the database file at `path` and return a
/// connection pool.
///
/// The parent directory is created if missing and foreign-key enforcement
/// is enabled on every connection.
pub async fn create_pool(path: &Path) -> Result<DbPool, sqlx::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create an in-memory pool for tests.
///
/// Limited to a single connection: each in-memory SQLite connection is its
/// own database, so a larger pool would scatter state across databases.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
