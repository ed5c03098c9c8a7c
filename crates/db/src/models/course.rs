//! Course reference data model.

use serde::Serialize;
use sqlx::FromRow;
use tutormatch_core::types::DbId;

/// A course row from the `courses` table. Seed data, read-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub course_id: DbId,
    pub course_name: String,
}
