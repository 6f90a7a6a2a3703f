//! Log-backed mailer
//!
//! Implements [`Mailer`] by emitting the welcome mail as a structured log
//! event. There is no real delivery channel behind it.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::ports::Mailer;
use crate::error::MailError;

/// Mailer that logs deliveries instead of sending them
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_welcome(&self, user: &User) -> Result<(), MailError> {
        tracing::info!(
            from = %self.from,
            to = %user.email,
            name = %user.name,
            "Sending welcome mail"
        );

        Ok(())
    }
}
