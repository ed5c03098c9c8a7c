//! Typed row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any insert DTOs. Result rows are never accessed by
//! dynamic column-name indexing.

pub mod course;
pub mod profile;
pub mod student;
pub mod traits;
pub mod tutor;
