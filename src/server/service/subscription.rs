//! Subscription lifecycle: create, verify, cancel and the account-deletion cascade.
//!
//! A user moves from no subscription to `pending` on create, to `active` once the
//! checkout signature is verified, and back to no subscription on cancellation.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::BillingConfig,
    data::{payment::PaymentRepository, user::UserRepository},
    error::AppError,
    events::feed::{ChangeFeed, CollectionChange},
    gateway::PaymentGateway,
    model::{
        payment::CreatePaymentParam,
        subscription::{CancelOutcome, PaymentVerificationParam, VerificationOutcome},
        user::{Subscription, SubscriptionStatus, User},
    },
    util::signature::verify_payment_signature,
};

/// Number of billing cycles requested for every subscription.
const TOTAL_BILLING_CYCLES: u32 = 12;

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentGateway,
    feed: &'a ChangeFeed,
    billing: &'a BillingConfig,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn PaymentGateway,
        feed: &'a ChangeFeed,
        billing: &'a BillingConfig,
    ) -> Self {
        Self {
            db,
            gateway,
            feed,
            billing,
        }
    }

    /// Creates a gateway subscription for the user and stores it as pending.
    ///
    /// # Returns
    /// - `Ok(String)` - Gateway subscription id for the checkout
    /// - `Err(AppError::BadRequest)` - User is an admin or already subscribed; no gateway call made
    /// - `Err(AppError::UpstreamErr)` - Gateway rejected the subscription
    pub async fn create(&self, user: &User) -> Result<String, AppError> {
        if user.is_admin() {
            return Err(AppError::BadRequest(
                "Admins do not need to buy a subscription".to_string(),
            ));
        }
        if user.has_active_subscription() {
            return Err(AppError::BadRequest(
                "You already have an active subscription".to_string(),
            ));
        }

        let created = self
            .gateway
            .create_subscription(&self.billing.plan_id, true, TOTAL_BILLING_CYCLES)
            .await?;

        let subscription = Subscription {
            id: created.id,
            status: SubscriptionStatus::parse(&created.status),
        };

        UserRepository::new(self.db)
            .set_subscription(user.id, &subscription)
            .await?;
        self.feed.publish(CollectionChange::User);

        tracing::info!(
            "User {} created subscription {} ({})",
            user.id,
            subscription.id,
            subscription.status.as_str()
        );

        Ok(subscription.id)
    }

    /// Verifies the checkout signature against the user's stored subscription id.
    ///
    /// The subscription id echoed by the client is ignored for the check. Nothing is
    /// written unless the signature matches.
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome::Verified)` - Payment recorded, subscription active
    /// - `Ok(VerificationOutcome::Rejected)` - Signature mismatch or no stored subscription
    /// - `Err(AppError)` - Database failure
    pub async fn verify(
        &self,
        user: &User,
        param: PaymentVerificationParam,
    ) -> Result<VerificationOutcome, AppError> {
        let Some(subscription) = &user.subscription else {
            tracing::warn!("User {} attempted payment verification without a subscription", user.id);
            return Ok(VerificationOutcome::Rejected);
        };

        let authentic = verify_payment_signature(
            &self.billing.key_secret,
            &param.payment_id,
            &subscription.id,
            &param.signature,
        )?;

        if !authentic {
            tracing::warn!(
                "Payment signature mismatch for user {} on subscription {}",
                user.id,
                subscription.id
            );
            return Ok(VerificationOutcome::Rejected);
        }

        PaymentRepository::new(self.db)
            .create(CreatePaymentParam {
                gateway_payment_id: param.payment_id.clone(),
                gateway_subscription_id: subscription.id.clone(),
                gateway_signature: param.signature,
            })
            .await?;

        UserRepository::new(self.db)
            .activate_subscription(user.id)
            .await?;
        self.feed.publish(CollectionChange::User);

        Ok(VerificationOutcome::Verified {
            payment_id: param.payment_id,
        })
    }

    /// Cancels the user's subscription, refunding when inside the refund window.
    ///
    /// The gateway cancellation happens first; if it fails nothing else changes.
    /// The payment record is deleted whether or not a refund is issued, then the
    /// subscription sub-record is cleared.
    ///
    /// # Returns
    /// - `Ok(CancelOutcome::Refunded)` - Cancelled within `refund_days` of payment
    /// - `Ok(CancelOutcome::NotRefunded)` - Cancelled later, or no payment on record
    /// - `Err(AppError::NotFound)` - User has no subscription
    /// - `Err(AppError::UpstreamErr)` - Gateway cancel or refund failed
    pub async fn cancel(&self, user: &User) -> Result<CancelOutcome, AppError> {
        let Some(subscription) = &user.subscription else {
            return Err(AppError::NotFound("No subscription found".to_string()));
        };

        self.gateway.cancel_subscription(&subscription.id).await?;

        let payment_repo = PaymentRepository::new(self.db);

        let outcome = match payment_repo.find_by_subscription_id(&subscription.id).await? {
            Some(payment) if payment.is_refundable(Utc::now(), self.billing.refund_days) => {
                self.gateway
                    .refund_payment(&payment.gateway_payment_id)
                    .await?;
                CancelOutcome::Refunded
            }
            Some(_) => CancelOutcome::NotRefunded,
            None => {
                tracing::warn!(
                    "No payment recorded for cancelled subscription {}",
                    subscription.id
                );
                CancelOutcome::NotRefunded
            }
        };

        payment_repo
            .delete_by_subscription_id(&subscription.id)
            .await?;
        UserRepository::new(self.db)
            .clear_subscription(user.id)
            .await?;
        self.feed.publish(CollectionChange::User);

        tracing::info!(
            "User {} cancelled subscription {} ({:?})",
            user.id,
            subscription.id,
            outcome
        );

        Ok(outcome)
    }

    /// Ends the subscription of an account about to be deleted.
    ///
    /// Cancels at the gateway and removes its payments without evaluating a
    /// refund. Users without a subscription cause no gateway call and no
    /// payment lookup.
    pub async fn end_for_deletion(&self, user: &User) -> Result<(), AppError> {
        let Some(subscription) = &user.subscription else {
            return Ok(());
        };

        self.gateway.cancel_subscription(&subscription.id).await?;

        PaymentRepository::new(self.db)
            .delete_by_subscription_id(&subscription.id)
            .await?;

        Ok(())
    }
}
