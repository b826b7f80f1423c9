//! Platform statistics and the admin dashboard report.
//!
//! A stats record holds the aggregate counts for one calendar period. The
//! dashboard reshapes the most recent records into a fixed twelve-period series
//! and compares the last two periods.

use chrono::{DateTime, Utc};

use crate::model::stats::{DashboardStatsDto, StatsPointDto};

/// Number of periods shown on the dashboard.
pub const DASHBOARD_PERIODS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub id: i32,
    pub users: i64,
    pub subscriptions: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

impl Stats {
    pub fn from_entity(entity: entity::stats::Model) -> Self {
        Self {
            id: entity.id,
            users: entity.users,
            subscriptions: entity.subscriptions,
            views: entity.views,
            created_at: entity.created_at,
        }
    }
}

/// One period of the dashboard series.
///
/// Padding periods have no timestamp and zero counts.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPoint {
    pub users: i64,
    pub subscriptions: i64,
    pub views: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl StatsPoint {
    fn zero() -> Self {
        Self {
            users: 0,
            subscriptions: 0,
            views: 0,
            created_at: None,
        }
    }

    pub fn into_dto(self) -> StatsPointDto {
        StatsPointDto {
            users: self.users,
            subscriptions: self.subscriptions,
            views: self.views,
            created_at: self.created_at,
        }
    }
}

impl From<Stats> for StatsPoint {
    fn from(stats: Stats) -> Self {
        Self {
            users: stats.users,
            subscriptions: stats.subscriptions,
            views: stats.views,
            created_at: Some(stats.created_at),
        }
    }
}

/// Change of a single metric between the previous and the current period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricChange {
    pub count: i64,
    pub percentage: f64,
    pub profit: bool,
}

impl MetricChange {
    /// Compares the current period against the previous one.
    ///
    /// A zero baseline yields `curr * 100` and always counts as profit, even
    /// when the current value is also zero.
    pub fn between(prev: i64, curr: i64) -> Self {
        if prev == 0 {
            return Self {
                count: curr,
                percentage: curr as f64 * 100.0,
                profit: true,
            };
        }

        let percentage = (curr - prev) as f64 / prev as f64 * 100.0;

        Self {
            count: curr,
            percentage,
            profit: percentage >= 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Exactly `DASHBOARD_PERIODS` points, oldest first.
    pub series: Vec<StatsPoint>,
    pub users: MetricChange,
    pub subscriptions: MetricChange,
    pub views: MetricChange,
}

impl DashboardReport {
    /// Builds the report from the most recent stats records, newest first.
    ///
    /// Records beyond the dashboard window are ignored. Missing periods are
    /// filled with zero points in front of the real data.
    pub fn build(newest_first: Vec<Stats>) -> Self {
        let mut real: Vec<StatsPoint> = newest_first
            .into_iter()
            .take(DASHBOARD_PERIODS)
            .map(StatsPoint::from)
            .collect();
        real.reverse();

        let mut series = Vec::with_capacity(DASHBOARD_PERIODS);
        series.resize_with(DASHBOARD_PERIODS - real.len(), StatsPoint::zero);
        series.extend(real);

        let curr = &series[DASHBOARD_PERIODS - 1];
        let prev = &series[DASHBOARD_PERIODS - 2];

        let users = MetricChange::between(prev.users, curr.users);
        let subscriptions = MetricChange::between(prev.subscriptions, curr.subscriptions);
        let views = MetricChange::between(prev.views, curr.views);

        Self {
            series,
            users,
            subscriptions,
            views,
        }
    }

    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            success: true,
            stats: self.series.into_iter().map(StatsPoint::into_dto).collect(),
            users_count: self.users.count,
            subscription_count: self.subscriptions.count,
            views_count: self.views.count,
            users_percentage: self.users.percentage,
            subscription_percentage: self.subscriptions.percentage,
            views_percentage: self.views.percentage,
            users_profit: self.users.profit,
            subscription_profit: self.subscriptions.profit,
            views_profit: self.views.profit,
        }
    }
}
