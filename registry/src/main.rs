//! Shinobi Registry
//!
//! A small registration service for the Leaf academy: ninjas are validated
//! and enrolled, promotions are checked, and users get a welcome mail.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryStore, LogMailer};
use app::{NinjaService, UserService};
use config::Config;
use domain::entities::{Ninja, User};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shinobi_registry=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shinobi registry...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let ninja_store: Arc<InMemoryStore<Ninja>> = Arc::new(InMemoryStore::new());
    let user_store: Arc<InMemoryStore<User>> = Arc::new(InMemoryStore::new());
    let mailer = Arc::new(LogMailer::new(config.mail_from.clone()));

    // Create application services
    let ninja_service = NinjaService::new(ninja_store.clone());
    let user_service = UserService::new(user_store.clone(), mailer);

    // Enroll a class of candidates
    let naruto = Ninja::new("Naruto", "Leaf", "Uzumaki", 16);
    ninja_service.register(&naruto).await?;
    ninja_service.promote(&naruto)?;
    ninja_service.can_go_on_dangerous_mission(&naruto);

    let hinata = Ninja::new("Hinata", "Leaf", "Hyuga", 14);
    ninja_service.register(&hinata).await?;
    ninja_service.can_go_on_dangerous_mission(&hinata);

    // A candidate the rules turn away
    let konohamaru = Ninja::new("Konohamaru", "Leaf", "Sarutobi", 4);
    if let Err(err) = ninja_service.register(&konohamaru).await {
        tracing::warn!(name = %konohamaru.name, error = %err, "Registration rejected");
    }

    // Register a user, which triggers the welcome mail
    let user = User::new("Cristian Silva", "cristian@email.com");
    user_service.register(&user).await?;

    // Dump the final roster
    let roster = serde_json::to_string_pretty(&ninja_store.saved())?;
    tracing::info!(
        ninjas = ninja_store.save_count(),
        users = user_store.save_count(),
        "Roster:\n{}",
        roster
    );

    Ok(())
}
