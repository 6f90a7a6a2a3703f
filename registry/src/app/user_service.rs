//! User service
//!
//! Handles user registration: persist the user, then send the welcome
//! mail. Users carry no field rules; the flow exists so construction,
//! storage, and mail each stay in their own collaborator.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::ports::{EntityStore, Mailer};
use crate::error::AppError;

/// Service for registering users
pub struct UserService<S, M>
where
    S: EntityStore<User>,
    M: Mailer,
{
    store: Arc<S>,
    mailer: Arc<M>,
}

impl<S, M> UserService<S, M>
where
    S: EntityStore<User>,
    M: Mailer,
{
    pub fn new(store: Arc<S>, mailer: Arc<M>) -> Self {
        Self { store, mailer }
    }

    /// Register a user and send the welcome mail
    ///
    /// The save runs first; no mail goes out when the save fails.
    /// Collaborator failures propagate unchanged.
    pub async fn register(&self, user: &User) -> Result<(), AppError> {
        self.store.save(user).await?;
        self.mailer.send_welcome(user).await?;

        tracing::info!(name = %user.name, email = %user.email, "User registered");

        Ok(())
    }
}
