//! Mail port trait
//!
//! Defines the interface for welcome-mail delivery.
//! Implementations are provided by adapters (e.g., the log-backed mailer).

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::error::MailError;

/// Delivery channel for registration mail
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the welcome mail for a freshly registered user
    async fn send_welcome(&self, user: &User) -> Result<(), MailError>;
}
