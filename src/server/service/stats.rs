//! Stats aggregation: keeps the newest period's counts current and builds the dashboard.
//!
//! Counts are always written to the latest period. A period is created on demand
//! when none exists yet.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, stats::StatsRepository, user::UserRepository},
    error::AppError,
    model::stats::{DashboardReport, Stats, DASHBOARD_PERIODS},
};

/// Aggregates platform counts into the current stats period.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes user and active subscription counts on the latest record.
    ///
    /// Opens a first period when no record exists yet.
    pub async fn refresh_user_counts(&self) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.count().await? as i64;
        let subscriptions = user_repo.count_active_subscribers().await? as i64;

        let latest = self.current_period().await?;

        StatsRepository::new(self.db)
            .update_user_counts(latest.id, users, subscriptions, Utc::now())
            .await?;

        tracing::debug!(
            "Stats refreshed: {} users, {} subscriptions",
            users,
            subscriptions
        );

        Ok(())
    }

    /// Recomputes total course views on the latest record.
    pub async fn refresh_views(&self) -> Result<(), AppError> {
        let views = CourseRepository::new(self.db).total_views().await?;

        let latest = self.current_period().await?;

        StatsRepository::new(self.db)
            .update_views(latest.id, views, Utc::now())
            .await?;

        Ok(())
    }

    /// Opens a new zeroed period. Run by the monthly scheduler.
    pub async fn start_period(&self) -> Result<Stats, AppError> {
        let stats = StatsRepository::new(self.db).create_empty().await?;

        tracing::info!("Opened stats period {}", stats.id);

        Ok(stats)
    }

    /// Opens a first period if the table is empty. Run at startup.
    pub async fn ensure_period(&self) -> Result<(), AppError> {
        if StatsRepository::new(self.db).count().await? == 0 {
            self.start_period().await?;
        }

        Ok(())
    }

    /// Builds the admin dashboard from the most recent periods.
    pub async fn dashboard(&self) -> Result<DashboardReport, AppError> {
        let records = StatsRepository::new(self.db)
            .latest_n(DASHBOARD_PERIODS as u64)
            .await?;

        Ok(DashboardReport::build(records))
    }

    async fn current_period(&self) -> Result<Stats, AppError> {
        match StatsRepository::new(self.db).latest().await? {
            Some(stats) => Ok(stats),
            None => self.start_period().await,
        }
    }
}
