use super::*;

/// Tests the startup check on an empty stats table.
///
/// Expected: exactly one zeroed record
#[tokio::test]
async fn creates_first_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StatsService::new(db);
    service.ensure_period().await?;
    service.ensure_period().await?;

    let repo = StatsRepository::new(db);
    assert_eq!(repo.count().await?, 1);

    let latest = repo.latest().await?.unwrap();
    assert_eq!((latest.users, latest.subscriptions, latest.views), (0, 0, 0));

    Ok(())
}

/// Tests that a new period becomes the latest record.
///
/// Expected: start_period returns a record newer than the existing one
#[tokio::test]
async fn start_period_becomes_latest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stats::StatsFactory::new(db)
        .counts(5, 2, 40)
        .created_at(Utc::now() - Duration::days(31))
        .build()
        .await?;

    let opened = StatsService::new(db).start_period().await?;

    let latest = StatsRepository::new(db).latest().await?.unwrap();
    assert_eq!(latest.id, opened.id);
    assert_eq!(latest.users, 0);

    Ok(())
}
