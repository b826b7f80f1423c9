use crate::server::{
    data::stats::StatsRepository, error::AppError, model::stats::DASHBOARD_PERIODS,
    service::stats::StatsService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod ensure_period;
