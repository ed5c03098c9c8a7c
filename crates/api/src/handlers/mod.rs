//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the
//! application. Handlers delegate to the repositories in `tutormatch_db`
//! and map errors via [`crate::error::AppError`].

pub mod pages;
pub mod profile;
pub mod registration;
