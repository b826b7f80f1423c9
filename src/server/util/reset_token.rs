//! One-time password reset tokens.
//!
//! The raw token is emailed to the user; only its SHA-256 hex digest is stored.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

/// How long an emailed reset link stays valid.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 15;

const RESET_TOKEN_BYTES: usize = 20;

/// A freshly generated reset token with its stored digest and expiry.
pub struct ResetToken {
    /// Raw token sent to the user.
    pub token: String,
    /// Digest persisted on the user record.
    pub digest: String,
    pub expires_at: DateTime<Utc>,
}

impl ResetToken {
    pub fn generate(now: DateTime<Utc>) -> Self {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        rand::rng().fill(&mut bytes);
        let token = hex::encode(bytes);

        Self {
            digest: digest(&token),
            token,
            expires_at: now + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        }
    }
}

/// SHA-256 hex digest of a raw reset token.
pub fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
