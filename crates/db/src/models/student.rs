//! Student entity model and insert DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutormatch_core::types::{DbId, Timestamp};

/// A student row from the `students` table.
///
/// The password hash never leaves the server: it is excluded from
/// serialization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub student_id: DbId,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub course_id: Option<DbId>,
    pub time_slot: Option<String>,
    pub selected_tutor_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for the single insert performed at the final wizard step.
///
/// `password_hash` is an Argon2 PHC string; the plaintext was discarded at
/// the account step.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub course_id: Option<DbId>,
    pub time_slot: Option<String>,
    pub selected_tutor_id: Option<DbId>,
}
