//! Tutor reference data models.

use serde::Serialize;
use sqlx::FromRow;
use tutormatch_core::types::DbId;

/// A tutor row from the `tutors` table. Seed data, read-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tutor {
    pub tutor_id: DbId,
    pub full_name: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

/// A tutor joined with the comma-separated list of their trait names,
/// as presented on the quiz step.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TutorWithTraits {
    pub tutor_id: DbId,
    pub full_name: String,
    pub traits: String,
}
