use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::upstream::UpstreamError,
    gateway::{GatewaySubscription, PaymentGateway},
};

const RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";

/// Razorpay REST client authenticated with the key id and secret.
pub struct RazorpayClient {
    http: reqwest::Client,
    key_id: String,
    key_secret: String,
    base_url: String,
}

#[derive(Serialize)]
struct CreateSubscriptionBody<'a> {
    plan_id: &'a str,
    customer_notify: u8,
    total_count: u32,
}

#[derive(Deserialize)]
struct SubscriptionResponse {
    id: String,
    status: String,
}

impl RazorpayClient {
    pub fn new(http: reqwest::Client, key_id: String, key_secret: String) -> Self {
        Self {
            http,
            key_id,
            key_secret,
            base_url: RAZORPAY_API_URL.to_string(),
        }
    }

    /// Sends an authenticated POST and fails on any non-success status.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, UpstreamError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(body)
            .send()
            .await
            .map_err(UpstreamError::GatewayRequest)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::GatewayStatus { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_subscription(
        &self,
        plan_id: &str,
        notify_customer: bool,
        total_cycles: u32,
    ) -> Result<GatewaySubscription, UpstreamError> {
        let body = CreateSubscriptionBody {
            plan_id,
            customer_notify: u8::from(notify_customer),
            total_count: total_cycles,
        };

        let subscription: SubscriptionResponse = self
            .post("/subscriptions", &body)
            .await?
            .json()
            .await
            .map_err(UpstreamError::GatewayRequest)?;

        tracing::debug!(
            "Created gateway subscription {} with status {}",
            subscription.id,
            subscription.status
        );

        Ok(GatewaySubscription {
            id: subscription.id,
            status: subscription.status,
        })
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<(), UpstreamError> {
        self.post(
            &format!("/subscriptions/{}/cancel", subscription_id),
            &serde_json::json!({}),
        )
        .await?;

        Ok(())
    }

    async fn refund_payment(&self, payment_id: &str) -> Result<(), UpstreamError> {
        self.post(
            &format!("/payments/{}/refund", payment_id),
            &serde_json::json!({}),
        )
        .await?;

        Ok(())
    }
}
