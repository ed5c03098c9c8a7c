//! HMAC-signed wizard-state tokens.
//!
//! The registration wizard carries its in-progress state on the client
//! between steps. Raw hidden fields would let a client forge intermediate
//! values, so the accumulated state is serialized to JSON and signed with
//! HMAC-SHA256; every step transition verifies the signature and expiry
//! before trusting any field. Format:
//!
//! ```text
//! v1.<hex(json payload)>.<hex(hmac-sha256)>
//! ```
//!
//! Tokens are short-lived (default 30 minutes); the server stores nothing.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tutormatch_core::error::CoreError;
use tutormatch_core::registration::RegistrationStep;
use tutormatch_core::types::DbId;

type HmacSha256 = Hmac<Sha256>;

/// Token format version prefix.
const TOKEN_VERSION: &str = "v1";

/// Default wizard token lifetime in minutes.
const DEFAULT_TTL_MINS: i64 = 30;

/// Configuration for wizard-state token signing.
#[derive(Debug, Clone)]
pub struct WizardTokenConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 30).
    pub ttl_mins: i64,
}

impl WizardTokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default            |
    /// |--------------------------|----------|--------------------|
    /// | `WIZARD_TOKEN_SECRET`    | no       | random per process |
    /// | `WIZARD_TOKEN_TTL_MINS`  | no       | `30`               |
    ///
    /// With a generated secret, in-flight registrations do not survive a
    /// restart; they are short-lived by design.
    pub fn from_env() -> Self {
        let secret = std::env::var("WIZARD_TOKEN_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(generate_secret);

        let ttl_mins: i64 = std::env::var("WIZARD_TOKEN_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_TTL_MINS.to_string())
            .parse()
            .expect("WIZARD_TOKEN_TTL_MINS must be a valid i64");

        Self { secret, ttl_mins }
    }
}

/// Generate a random 32-byte hex secret for this process.
fn generate_secret() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

/// The accumulated registration state threaded between wizard steps.
///
/// `step` is the last step the client has completed; each handler checks it
/// against the step it expects, which enforces the strict linear order.
/// `password_hash` is the Argon2 PHC string produced at the account step;
/// the plaintext password is never carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: RegistrationStep,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub course_id: Option<DbId>,
    pub time_slot: Option<String>,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Serialize and sign `state`, returning the token string.
pub fn issue(state: &WizardState, config: &WizardTokenConfig) -> Result<String, CoreError> {
    let payload = serde_json::to_vec(state)
        .map_err(|e| CoreError::Internal(format!("Wizard state serialization failed: {e}")))?;

    let mut mac = HmacSha256::new_from_slice(config.secret.as_bytes())
        .map_err(|e| CoreError::Internal(format!("HMAC key setup failed: {e}")))?;
    mac.update(&payload);
    let tag = mac.finalize().into_bytes();

    Ok(format!(
        "{TOKEN_VERSION}.{}.{}",
        hex::encode(payload),
        hex::encode(tag)
    ))
}

/// Verify a token's signature and expiry, returning the embedded state.
///
/// All failure modes (malformed, tampered, wrong secret, expired) surface as
/// a validation error telling the user to restart the wizard.
pub fn verify(token: &str, config: &WizardTokenConfig) -> Result<WizardState, CoreError> {
    let invalid = || CoreError::Validation("Registration session is invalid. Please start again.".to_string());

    let mut parts = token.splitn(3, '.');
    let version = parts.next().ok_or_else(invalid)?;
    let payload_hex = parts.next().ok_or_else(invalid)?;
    let tag_hex = parts.next().ok_or_else(invalid)?;
    if version != TOKEN_VERSION {
        return Err(invalid());
    }

    let payload = hex::decode(payload_hex).map_err(|_| invalid())?;
    let tag = hex::decode(tag_hex).map_err(|_| invalid())?;

    let mut mac = HmacSha256::new_from_slice(config.secret.as_bytes())
        .map_err(|e| CoreError::Internal(format!("HMAC key setup failed: {e}")))?;
    mac.update(&payload);
    // Constant-time comparison.
    mac.verify_slice(&tag).map_err(|_| invalid())?;

    let state: WizardState = serde_json::from_slice(&payload).map_err(|_| invalid())?;

    let expires_at = state.iat + config.ttl_mins * 60;
    if chrono::Utc::now().timestamp() > expires_at {
        return Err(CoreError::Validation(
            "Registration session has expired. Please start again.".to_string(),
        ));
    }

    Ok(state)
}

/// Check that the token state has completed `expected`, the predecessor of
/// the step being submitted.
pub fn require_step(state: &WizardState, expected: RegistrationStep) -> Result<(), CoreError> {
    if state.step != expected {
        return Err(CoreError::Validation(format!(
            "Registration steps must be completed in order; expected the {} step",
            expected.label()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn test_config() -> WizardTokenConfig {
        WizardTokenConfig {
            secret: "test-secret".to_string(),
            ttl_mins: 30,
        }
    }

    fn sample_state() -> WizardState {
        WizardState {
            step: RegistrationStep::Account,
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            username: "ana1".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            course_id: None,
            time_slot: None,
            iat: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let token = issue(&sample_state(), &config).unwrap();
        let state = verify(&token, &config).expect("token should verify");
        assert_eq!(state, sample_state_with_iat(state.iat));
    }

    fn sample_state_with_iat(iat: i64) -> WizardState {
        WizardState {
            iat,
            ..sample_state()
        }
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let config = test_config();
        let token = issue(&sample_state(), &config).unwrap();

        // Flip one hex digit inside the payload section.
        let mut chars: Vec<char> = token.chars().collect();
        let idx = 5;
        chars[idx] = if chars[idx] == '0' { '1' } else { '0' };
        let tampered: String = chars.into_iter().collect();

        assert!(verify(&tampered, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = issue(&sample_state(), &config).unwrap();

        let other = WizardTokenConfig {
            secret: "different-secret".to_string(),
            ttl_mins: 30,
        };
        assert!(verify(&token, &other).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let mut state = sample_state();
        state.iat = chrono::Utc::now().timestamp() - 31 * 60;
        let token = issue(&state, &config).unwrap();

        let err = verify(&token, &config).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("expired"));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let config = test_config();
        assert!(verify("", &config).is_err());
        assert!(verify("v1.deadbeef", &config).is_err());
        assert!(verify("v2.00.00", &config).is_err());
        assert!(verify("v1.not-hex.also-not-hex", &config).is_err());
    }

    #[test]
    fn test_require_step() {
        let state = sample_state();
        assert!(require_step(&state, RegistrationStep::Account).is_ok());
        assert!(require_step(&state, RegistrationStep::Class).is_err());
    }
}
