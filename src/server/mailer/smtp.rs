use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::Config,
    error::{upstream::UpstreamError, AppError},
    mailer::{Email, Mailer},
};

/// SMTP mailer sending through a STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport from configuration.
    ///
    /// The SMTP user doubles as the sender address.
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport configured (no connection is made yet)
    /// - `Err(AppError::UpstreamErr)` - Invalid relay host or sender address
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| UpstreamError::Mail(format!("Failed to create SMTP transport: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = config
            .smtp_user
            .parse()
            .map_err(|e| UpstreamError::Mail(format!("Invalid sender address: {}", e)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: Email) -> Result<(), UpstreamError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| UpstreamError::Mail(format!("Invalid recipient '{}': {}", email.to, e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .body(email.body)
            .map_err(|e| UpstreamError::Mail(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| UpstreamError::Mail(e.to_string()))?;

        Ok(())
    }
}
