//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Payment gateway, media host and mailer clients behind trait objects
//! - Token service for signing and verifying session cookies
//! - Change feed publishing user and course writes to the stats listener
//! - Frontend URL for redirects and emailed links

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use url::Url;

use crate::server::{
    config::BillingConfig, events::feed::ChangeFeed, gateway::PaymentGateway, mailer::Mailer,
    media::MediaHost, middleware::token::TokenService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Upstream clients are `Arc` trait objects wrapping a shared `reqwest::Client`
/// - `ChangeFeed` clones share one broadcast channel
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Payment gateway used for subscription create, cancel and refund.
    pub gateway: Arc<dyn PaymentGateway>,

    /// Media host storing avatars, course posters and lecture videos.
    pub media: Arc<dyn MediaHost>,

    /// Outgoing mail for password resets and contact forms.
    pub mailer: Arc<dyn Mailer>,

    pub tokens: TokenService,

    /// Publishes user and course changes to the stats listener.
    pub feed: ChangeFeed,

    pub billing: BillingConfig,

    /// Base URL of the frontend for payment redirects and reset links.
    pub frontend_url: Url,

    /// Recipient of contact and course request emails.
    pub owner_email: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        gateway: Arc<dyn PaymentGateway>,
        media: Arc<dyn MediaHost>,
        mailer: Arc<dyn Mailer>,
        tokens: TokenService,
        feed: ChangeFeed,
        billing: BillingConfig,
        frontend_url: Url,
        owner_email: String,
    ) -> Self {
        Self {
            db,
            gateway,
            media,
            mailer,
            tokens,
            feed,
            billing,
            frontend_url,
            owner_email,
        }
    }
}
