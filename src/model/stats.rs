use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsPointDto {
    pub users: i64,
    pub subscriptions: i64,
    pub views: i64,
    /// Absent for the zero padding entries
    pub created_at: Option<DateTime<Utc>>,
}

/// Admin dashboard payload: twelve periods oldest first plus latest-vs-previous changes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub success: bool,
    pub stats: Vec<StatsPointDto>,
    pub users_count: i64,
    pub subscription_count: i64,
    pub views_count: i64,
    pub users_percentage: f64,
    pub subscription_percentage: f64,
    pub views_percentage: f64,
    pub users_profit: bool,
    pub subscription_profit: bool,
    pub views_profit: bool,
}
