use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    service::stats::StatsService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure a stats period exists so the first change has a record to update.
pub async fn ensure_stats_record(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    StatsService::new(db).ensure_period().await
}

/// Builds the HTTP client shared by the payment gateway and media host.
///
/// Redirects are disabled; both upstreams answer directly.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(InternalError::HttpClient)?;

    Ok(client)
}
