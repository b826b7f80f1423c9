//! Payment record domain model.
//!
//! A payment is written once, after the gateway signature has been verified,
//! and removed again when its subscription is cancelled or its owner deleted.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub gateway_payment_id: String,
    pub gateway_subscription_id: String,
    pub gateway_signature: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            gateway_payment_id: entity.gateway_payment_id,
            gateway_subscription_id: entity.gateway_subscription_id,
            gateway_signature: entity.gateway_signature,
            created_at: entity.created_at,
        }
    }

    /// Whether a cancellation at `now` still falls inside the refund window.
    ///
    /// The window is exclusive: a payment exactly `refund_days` old is not refunded.
    /// A window too large to represent never closes.
    pub fn is_refundable(&self, now: DateTime<Utc>, refund_days: i64) -> bool {
        match chrono::TimeDelta::try_days(refund_days) {
            Some(window) => now - self.created_at < window,
            None => refund_days > 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub gateway_payment_id: String,
    pub gateway_subscription_id: String,
    pub gateway_signature: String,
}
