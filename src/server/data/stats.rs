//! Stats data repository.
//!
//! One stats row exists per calendar period. The newest row is the one the
//! aggregator overwrites; "newest" is by `created_at`, then by id.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::stats::Stats;

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    /// Creates a new StatsRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a zeroed record opening a new period.
    pub async fn create_empty(&self) -> Result<Stats, DbErr> {
        let entity = entity::stats::ActiveModel {
            users: ActiveValue::Set(0),
            subscriptions: ActiveValue::Set(0),
            views: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Stats::from_entity(entity))
    }

    /// Gets the newest record.
    pub async fn latest(&self) -> Result<Option<Stats>, DbErr> {
        Ok(self.latest_n(1).await?.into_iter().next())
    }

    /// Gets up to `limit` records, newest first.
    pub async fn latest_n(&self, limit: u64) -> Result<Vec<Stats>, DbErr> {
        let entities = entity::prelude::Stats::find()
            .order_by_desc(entity::stats::Column::CreatedAt)
            .order_by_desc(entity::stats::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Stats::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Stats::find().count(self.db).await
    }

    /// Overwrites the user and subscription counts of a record and stamps it with `at`.
    pub async fn update_user_counts(
        &self,
        stats_id: i32,
        users: i64,
        subscriptions: i64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Stats::update_many()
            .filter(entity::stats::Column::Id.eq(stats_id))
            .col_expr(entity::stats::Column::Users, Expr::value(users))
            .col_expr(entity::stats::Column::Subscriptions, Expr::value(subscriptions))
            .col_expr(entity::stats::Column::CreatedAt, Expr::value(at))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Overwrites the view count of a record and stamps it with `at`.
    pub async fn update_views(
        &self,
        stats_id: i32,
        views: i64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Stats::update_many()
            .filter(entity::stats::Column::Id.eq(stats_id))
            .col_expr(entity::stats::Column::Views, Expr::value(views))
            .col_expr(entity::stats::Column::CreatedAt, Expr::value(at))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
