//! Payment gateway seam.
//!
//! Subscriptions, cancellations and refunds are delegated to the gateway's REST
//! API. The lifecycle manager only depends on the `PaymentGateway` trait so tests
//! can substitute an in-process fake.

pub mod razorpay;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::error::upstream::UpstreamError;

/// Subscription as reported by the gateway on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySubscription {
    pub id: String,
    /// Raw gateway status, e.g. `created` or `active`.
    pub status: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a subscription to `plan_id` billed for `total_cycles` cycles.
    async fn create_subscription(
        &self,
        plan_id: &str,
        notify_customer: bool,
        total_cycles: u32,
    ) -> Result<GatewaySubscription, UpstreamError>;

    /// Cancels a subscription immediately.
    async fn cancel_subscription(&self, subscription_id: &str) -> Result<(), UpstreamError>;

    /// Refunds a captured payment in full.
    async fn refund_payment(&self, payment_id: &str) -> Result<(), UpstreamError>;
}
