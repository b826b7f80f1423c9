mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    events::{feed::ChangeFeed, stats_listener},
    gateway::razorpay::RazorpayClient,
    mailer::smtp::SmtpMailer,
    media::cloudinary::CloudinaryClient,
    middleware::token::TokenService,
    router, scheduler, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_stats_record(&db).await?;

    let http_client = startup::setup_reqwest_client()?;
    let gateway = RazorpayClient::new(
        http_client.clone(),
        config.razorpay_key_id.clone(),
        config.razorpay_key_secret.clone(),
    );
    let media = CloudinaryClient::new(
        http_client,
        config.cloudinary_cloud_name.clone(),
        config.cloudinary_api_key.clone(),
        config.cloudinary_api_secret.clone(),
    );
    let mailer = SmtpMailer::from_config(&config)?;

    tracing::info!("Starting server");

    // Listener subscribes before any request can publish
    let feed = ChangeFeed::new();
    let _listener = stats_listener::supervise(db.clone(), feed.clone());

    let _scheduler = scheduler::stats::start_scheduler(db.clone()).await?;

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin(&config)?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::COOKIE]);

    let state = AppState::new(
        db,
        Arc::new(gateway),
        Arc::new(media),
        Arc::new(mailer),
        TokenService::new(&config.jwt_secret),
        feed,
        config.billing(),
        config.frontend_url.clone(),
        config.owner_email.clone(),
    );

    let app = router::router()
        .with_state(state)
        .merge(router::docs())
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS origin derived from the configured frontend URL.
fn frontend_origin(config: &Config) -> Result<HeaderValue, AppError> {
    let origin = config.frontend_url.origin().ascii_serialization();

    HeaderValue::from_str(&origin).map_err(|e| {
        server::error::config::ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
