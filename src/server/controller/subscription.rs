use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        subscription::{GatewayKeyDto, PaymentVerificationDto, SubscribeResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::subscription::{CancelOutcome, PaymentVerificationParam, VerificationOutcome},
        service::subscription::SubscriptionService,
        state::AppState,
        util::frontend,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Create a gateway subscription for the signed-in user.
///
/// # Returns
/// - `201 Created` - Subscription id for the checkout
/// - `400 Bad Request` - Caller is an admin or already subscribed
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Gateway or database error
#[utoipa::path(
    get,
    path = "/api/v1/subscribe",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 201, description = "Subscription created", body = SubscribeResponseDto),
        (status = 400, description = "Admin or already subscribed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn buy_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let subscription_id =
        SubscriptionService::new(&state.db, &*state.gateway, &state.feed, &state.billing)
            .create(&user)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponseDto {
            success: true,
            subscription_id,
        }),
    ))
}

/// Verify the checkout callback and redirect to the frontend.
///
/// Redirects to `/paymentsuccess?reference={payment_id}` when the signature
/// matches the stored subscription, `/paymentfail` otherwise.
#[utoipa::path(
    post,
    path = "/api/v1/paymentverification",
    tag = SUBSCRIPTION_TAG,
    request_body(content = PaymentVerificationDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the frontend success or failure page"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn payment_verification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<PaymentVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let outcome = SubscriptionService::new(&state.db, &*state.gateway, &state.feed, &state.billing)
        .verify(
            &user,
            PaymentVerificationParam {
                payment_id: payload.razorpay_payment_id,
                subscription_id: payload.razorpay_subscription_id,
                signature: payload.razorpay_signature,
            },
        )
        .await?;

    let target = match outcome {
        VerificationOutcome::Verified { payment_id } => {
            let mut url = frontend::page(&state.frontend_url, "paymentsuccess")?;
            url.query_pairs_mut().append_pair("reference", &payment_id);
            url
        }
        VerificationOutcome::Rejected => frontend::page(&state.frontend_url, "paymentfail")?,
    };

    Ok(Redirect::to(target.as_str()))
}

/// Public gateway key id for the frontend checkout.
#[utoipa::path(
    get,
    path = "/api/v1/razorpaykey",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Gateway key id", body = GatewayKeyDto)
    ),
)]
pub async fn get_razorpay_key(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GatewayKeyDto {
            success: true,
            key: state.billing.key_id.clone(),
        }),
    )
}

/// Cancel the signed-in user's subscription.
///
/// Refunds the payment when cancelled within the refund window.
///
/// # Returns
/// - `200 OK` - Cancelled, with or without refund
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No subscription
/// - `500 Internal Server Error` - Gateway or database error
#[utoipa::path(
    delete,
    path = "/api/v1/subscribe/cancel",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Subscription cancelled", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No subscription", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let outcome = SubscriptionService::new(&state.db, &*state.gateway, &state.feed, &state.billing)
        .cancel(&user)
        .await?;

    let refund_days = state.billing.refund_days;
    let message = match outcome {
        CancelOutcome::Refunded => format!(
            "{}: Your Subscription is now cancelled, You will receive full refund within {} days",
            user.name, refund_days
        ),
        CancelOutcome::NotRefunded => format!(
            "Subscription Cancelled, No refund initiated as subscription was cancelled after {} days.",
            refund_days
        ),
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
