//! Registration wizard step model and field validation.
//!
//! The wizard is a strict linear flow: a step is reachable only by
//! completing the previous one. Handlers in the API crate check the
//! step recorded in the signed wizard token against the step they expect.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The four steps in the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Account,
    Class,
    Quiz,
    Final,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl RegistrationStep {
    /// Convert a 1-based step number to a `RegistrationStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Account),
            2 => Ok(Self::Class),
            3 => Ok(Self::Quiz),
            4 => Ok(Self::Final),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Account => 1,
            Self::Class => 2,
            Self::Quiz => 3,
            Self::Final => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Class => "Class",
            Self::Quiz => "Quiz",
            Self::Final => "Final",
        }
    }

    /// The step that follows this one, or `None` for the terminal step.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Account => Some(Self::Class),
            Self::Class => Some(Self::Quiz),
            Self::Quiz => Some(Self::Final),
            Self::Final => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Require that a form field is present after trimming whitespace.
///
/// Returns the trimmed value, or a validation error naming the field.
pub fn require_field<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Validated account-step fields with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Validate the account step: every field must be non-empty.
///
/// The password is required but otherwise unconstrained; it is hashed
/// immediately after this check and the plaintext is discarded.
pub fn validate_account(
    name: &str,
    email: &str,
    username: &str,
    password: &str,
) -> Result<AccountFields, CoreError> {
    Ok(AccountFields {
        name: require_field(name, "Full name")?.to_string(),
        email: require_field(email, "Email")?.to_string(),
        username: require_field(username, "Username")?.to_string(),
        password: require_field(password, "Password")?.to_string(),
    })
}
