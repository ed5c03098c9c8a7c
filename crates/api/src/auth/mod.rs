//! Authentication and wizard-state integrity primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`wizard_token`] -- HMAC-signed tokens carrying in-progress
//!   registration state between wizard steps.

pub mod password;
pub mod wizard_token;
