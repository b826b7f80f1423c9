use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::stats::StatsService};

/// Midnight on the first day of every month.
const MONTHLY: &str = "0 0 0 1 * *";

/// Starts the stats period scheduler
///
/// Opens a new zeroed stats record at the start of every month. The change
/// listener keeps writing to whichever record is latest, so counts from then on
/// accumulate in the new period.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(MONTHLY, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = StatsService::new(&db).start_period().await {
                tracing::error!("Error opening stats period: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Stats period scheduler started");

    Ok(scheduler)
}
