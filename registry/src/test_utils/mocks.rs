//! Mock implementations of port traits
//!
//! The in-memory store adapter already records saves, so tests use it
//! directly; the mocks here cover the failure paths and the mail channel.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::ports::{EntityStore, Mailer};
use crate::error::{MailError, StoreError};

/// A store whose save always fails with a backend error
pub struct FailingStore;

#[async_trait]
impl<E> EntityStore<E> for FailingStore
where
    E: Send + Sync,
{
    async fn save(&self, _entity: &E) -> Result<(), StoreError> {
        Err(StoreError::Backend("mock store failure".to_string()))
    }
}

/// A mailer that records deliveries and can be configured to fail
#[derive(Default)]
pub struct MockMailer {
    pub sent: Arc<RwLock<Vec<User>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose deliveries all fail
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(true)),
        }
    }

    /// Snapshot of the delivered mail, in send order
    pub fn sent(&self) -> Vec<User> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_welcome(&self, user: &User) -> Result<(), MailError> {
        if *self.should_fail.read().unwrap() {
            return Err(MailError::Delivery("mock delivery failure".to_string()));
        }

        self.sent.write().unwrap().push(user.clone());
        Ok(())
    }
}
