//! Repository for the `courses` table.

use sqlx::SqlitePool;
use tutormatch_core::types::DbId;

use crate::models::course::Course;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "course_id, course_name";

/// Provides read operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE course_id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY course_id ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Resolve a course ID to its name, returning `"Unknown"` when the ID
    /// is absent or references no row.
    pub async fn resolve_name(
        pool: &SqlitePool,
        course_id: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let Some(id) = course_id else {
            return Ok("Unknown".to_string());
        };
        Ok(Self::find_by_id(pool, id)
            .await?
            .map(|c| c.course_name)
            .unwrap_or_else(|| "Unknown".to_string()))
    }
}
