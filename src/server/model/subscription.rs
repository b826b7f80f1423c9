//! Subscription lifecycle parameters and outcomes.

/// Checkout fields returned by the gateway after payment.
#[derive(Debug, Clone)]
pub struct PaymentVerificationParam {
    pub payment_id: String,
    /// Subscription id as echoed by the client. Informational only; the stored
    /// id on the user record is the one that gets signed.
    pub subscription_id: String,
    pub signature: String,
}

/// Result of checking a payment signature.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// Payment recorded and subscription activated.
    Verified { payment_id: String },
    /// Signature mismatch or nothing to verify; nothing was written.
    Rejected,
}

/// Result of a user-initiated cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CancelOutcome {
    /// Cancelled inside the refund window and refund requested.
    Refunded,
    /// Cancelled after the refund window, or with no payment on record.
    NotRefunded,
}
