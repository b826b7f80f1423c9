//! Password hashing with Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a password into a PHC string (algorithm, params, salt and hash).
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
