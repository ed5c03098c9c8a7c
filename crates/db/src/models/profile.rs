//! Joined profile view returned after login.

use serde::Serialize;
use sqlx::FromRow;
use tutormatch_core::types::{DbId, Timestamp};

/// A student joined with their course and tutor names.
///
/// Both joins are LEFT joins: a missing or stale course/tutor reference
/// yields `None` here and is rendered as "Unknown" by the caller.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentProfile {
    pub student_id: DbId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub time_slot: Option<String>,
    pub course_name: Option<String>,
    pub tutor_name: Option<String>,
    pub created_at: Timestamp,
}
