//! Repository for the `tutors` table and its trait association.

use sqlx::SqlitePool;
use tutormatch_core::types::DbId;

use crate::models::tutor::{Tutor, TutorWithTraits};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "tutor_id, full_name, bio, photo";

/// Provides read operations for tutors.
pub struct TutorRepo;

impl TutorRepo {
    /// Find a tutor by their internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors WHERE tutor_id = $1");
        sqlx::query_as::<_, Tutor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tutors ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Tutor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutors ORDER BY tutor_id ASC");
        sqlx::query_as::<_, Tutor>(&query).fetch_all(pool).await
    }

    /// List tutors joined with a comma-separated list of their trait names,
    /// as offered on the quiz step.
    ///
    /// Tutors with no traits are omitted by the inner join, matching the
    /// quiz presentation.
    pub async fn list_with_traits(pool: &SqlitePool) -> Result<Vec<TutorWithTraits>, sqlx::Error> {
        sqlx::query_as::<_, TutorWithTraits>(
            "SELECT tutors.tutor_id AS tutor_id,
                    tutors.full_name AS full_name,
                    GROUP_CONCAT(traits.trait_name, ', ') AS traits
             FROM tutors
             JOIN tutor_traits ON tutors.tutor_id = tutor_traits.tutor_id
             JOIN traits ON tutor_traits.trait_id = traits.trait_id
             GROUP BY tutors.tutor_id
             ORDER BY tutors.tutor_id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Resolve a tutor ID to their full name, returning `"Unknown"` when the
    /// ID is absent or references no row.
    pub async fn resolve_name(
        pool: &SqlitePool,
        tutor_id: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let Some(id) = tutor_id else {
            return Ok("Unknown".to_string());
        };
        Ok(Self::find_by_id(pool, id)
            .await?
            .map(|t| t.full_name)
            .unwrap_or_else(|| "Unknown".to_string()))
    }
}
