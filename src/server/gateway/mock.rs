use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    error::upstream::UpstreamError,
    gateway::{GatewaySubscription, PaymentGateway},
};

/// Call recorded by `MockGateway`.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Create { plan_id: String, notify: bool, cycles: u32 },
    Cancel(String),
    Refund(String),
}

/// In-process gateway that records calls and returns canned results.
pub struct MockGateway {
    calls: Mutex<Vec<GatewayCall>>,
    subscription_id: String,
    initial_status: String,
    fail_cancel: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            subscription_id: "sub_mock".to_string(),
            initial_status: "created".to_string(),
            fail_cancel: false,
        }
    }

    /// Sets the id and status returned by `create_subscription`.
    pub fn with_subscription(mut self, id: &str, status: &str) -> Self {
        self.subscription_id = id.to_string();
        self.initial_status = status.to_string();
        self
    }

    /// Makes `cancel_subscription` fail with a gateway error.
    pub fn failing_cancel(mut self) -> Self {
        self.fail_cancel = true;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_subscription(
        &self,
        plan_id: &str,
        notify_customer: bool,
        total_cycles: u32,
    ) -> Result<GatewaySubscription, UpstreamError> {
        self.record(GatewayCall::Create {
            plan_id: plan_id.to_string(),
            notify: notify_customer,
            cycles: total_cycles,
        });

        Ok(GatewaySubscription {
            id: self.subscription_id.clone(),
            status: self.initial_status.clone(),
        })
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<(), UpstreamError> {
        self.record(GatewayCall::Cancel(subscription_id.to_string()));

        if self.fail_cancel {
            return Err(UpstreamError::GatewayStatus {
                status: 502,
                body: "gateway unavailable".to_string(),
            });
        }

        Ok(())
    }

    async fn refund_payment(&self, payment_id: &str) -> Result<(), UpstreamError> {
        self.record(GatewayCall::Refund(payment_id.to_string()));
        Ok(())
    }
}
