//! Stats factory for creating periodic snapshot rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stats snapshots.
pub struct StatsFactory<'a> {
    db: &'a DatabaseConnection,
    users: i64,
    subscriptions: i64,
    views: i64,
    created_at: DateTime<Utc>,
}

impl<'a> StatsFactory<'a> {
    /// Creates a new StatsFactory with zeroed counters created now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            users: 0,
            subscriptions: 0,
            views: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets all three counters at once.
    pub fn counts(mut self, users: i64, subscriptions: i64, views: i64) -> Self {
        self.users = users;
        self.subscriptions = subscriptions;
        self.views = views;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the stats entity into the database.
    pub async fn build(self) -> Result<entity::stats::Model, DbErr> {
        entity::stats::ActiveModel {
            users: ActiveValue::Set(self.users),
            subscriptions: ActiveValue::Set(self.subscriptions),
            views: ActiveValue::Set(self.views),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zeroed stats record created now.
pub async fn create_stats(db: &DatabaseConnection) -> Result<entity::stats::Model, DbErr> {
    StatsFactory::new(db).build().await
}
