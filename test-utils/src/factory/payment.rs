//! Payment factory for creating test payment records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating payment records linked to a gateway subscription id.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    subscription_id: String,
    payment_id: String,
    created_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory for the given gateway subscription id.
    ///
    /// Defaults:
    /// - payment_id: `"pay_{id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, subscription_id: impl Into<String>) -> Self {
        Self {
            db,
            subscription_id: subscription_id.into(),
            payment_id: format!("pay_{}", next_id()),
            created_at: Utc::now(),
        }
    }

    /// Sets the gateway payment id.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = payment_id.into();
        self
    }

    /// Sets the creation timestamp, used to place a payment inside or outside the refund window.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the payment entity into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            gateway_payment_id: ActiveValue::Set(self.payment_id),
            gateway_subscription_id: ActiveValue::Set(self.subscription_id),
            gateway_signature: ActiveValue::Set("signature".to_string()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values for the given subscription id.
pub async fn create_payment(
    db: &DatabaseConnection,
    subscription_id: impl Into<String>,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, subscription_id).build().await
}
