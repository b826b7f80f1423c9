//! Outgoing email seam.

pub mod smtp;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::error::upstream::UpstreamError;

/// Plain-text email to a single recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), UpstreamError>;
}
