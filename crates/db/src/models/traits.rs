//! Tutor personality trait reference data model.

use serde::Serialize;
use sqlx::FromRow;
use tutormatch_core::types::DbId;

/// A trait row from the `traits` table. Seed data, read-only; the quiz step
/// offers these for filtering tutors.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trait {
    pub trait_id: DbId,
    pub trait_name: String,
}
