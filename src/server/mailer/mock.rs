use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    error::upstream::UpstreamError,
    mailer::{Email, Mailer},
};

/// In-process mailer that keeps every sent email.
pub struct MockMailer {
    sent: Mutex<Vec<Email>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: Email) -> Result<(), UpstreamError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
