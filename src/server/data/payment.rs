//! Payment data repository.
//!
//! Payments are keyed by gateway subscription id. Nothing enforces a single
//! payment per subscription, so lookups return the oldest match and deletes
//! remove every match.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::payment::{CreatePaymentParam, Payment};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new PaymentRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a verified payment.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The stored payment with its creation time
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            gateway_payment_id: ActiveValue::Set(param.gateway_payment_id),
            gateway_subscription_id: ActiveValue::Set(param.gateway_subscription_id),
            gateway_signature: ActiveValue::Set(param.gateway_signature),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    /// Finds the oldest payment recorded for a gateway subscription.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - Payment found
    /// - `Ok(None)` - No payment for that subscription
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_subscription_id(
        &self,
        subscription_id: &str,
    ) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find()
            .filter(entity::payment::Column::GatewaySubscriptionId.eq(subscription_id))
            .order_by_asc(entity::payment::Column::CreatedAt)
            .order_by_asc(entity::payment::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }

    /// Deletes every payment recorded for a gateway subscription.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of payments deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_subscription_id(&self, subscription_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::GatewaySubscriptionId.eq(subscription_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
