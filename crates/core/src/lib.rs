//! Domain types shared across the TutorMatch workspace.
//!
//! This crate is I/O-free: it defines the error taxonomy, common type
//! aliases, and the registration wizard's step model and field validation.

pub mod error;
pub mod registration;
pub mod types;
