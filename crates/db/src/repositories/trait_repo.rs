//! Repository for the `traits` table.

use sqlx::SqlitePool;

use crate::models::traits::Trait;

/// Provides read operations for tutor traits.
pub struct TraitRepo;

impl TraitRepo {
    /// List all traits ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Trait>, sqlx::Error> {
        sqlx::query_as::<_, Trait>(
            "SELECT trait_id, trait_name FROM traits ORDER BY trait_id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
