//! Payment gateway signature checks.
//!
//! The gateway signs `payment_id|subscription_id` with the shared key secret using
//! HMAC-SHA256 and hands the lowercase hex digest to the checkout callback.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::server::error::internal::InternalError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the expected checkout signature as lowercase hex.
///
/// # Arguments
/// - `secret` - Gateway key secret
/// - `payment_id` - Gateway payment id from the checkout callback
/// - `subscription_id` - Subscription id stored on the user record
///
/// # Returns
/// - `Ok(String)` - Hex encoded HMAC-SHA256 digest
/// - `Err(InternalError::SignatureKey)` - Secret rejected as an HMAC key
pub fn sign_payment(
    secret: &str,
    payment_id: &str,
    subscription_id: &str,
) -> Result<String, InternalError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| InternalError::SignatureKey(e.to_string()))?;
    mac.update(payment_id.as_bytes());
    mac.update(b"|");
    mac.update(subscription_id.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks a supplied checkout signature in constant time.
///
/// # Returns
/// - `Ok(true)` - Signature matches the expected digest
/// - `Ok(false)` - Signature differs in content or length
/// - `Err(InternalError::SignatureKey)` - Secret rejected as an HMAC key
pub fn verify_payment_signature(
    secret: &str,
    payment_id: &str,
    subscription_id: &str,
    signature: &str,
) -> Result<bool, InternalError> {
    let expected = sign_payment(secret, payment_id, subscription_id)?;

    if expected.len() != signature.len() {
        return Ok(false);
    }

    Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
}
