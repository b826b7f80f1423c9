use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribeResponseDto {
    pub success: bool,
    /// Gateway subscription id the frontend opens checkout with
    pub subscription_id: String,
}

/// Fields posted back by the gateway checkout after payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentVerificationDto {
    pub razorpay_payment_id: String,
    pub razorpay_subscription_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GatewayKeyDto {
    pub success: bool,
    pub key: String,
}
