//! Ninja service
//!
//! Handles ninja registration, promotion, and mission clearance checks.
//! Rule decisions live in [`eligibility`](crate::app::eligibility); this
//! service adds the notices and the save call on top of them.

use std::sync::Arc;

use crate::app::eligibility;
use crate::domain::entities::Ninja;
use crate::domain::ports::EntityStore;
use crate::error::AppError;

/// Service for registering and promoting ninjas
pub struct NinjaService<S>
where
    S: EntityStore<Ninja>,
{
    store: Arc<S>,
}

impl<S> NinjaService<S>
where
    S: EntityStore<Ninja>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a new ninja
    ///
    /// Validates the candidate, then persists it. An invalid candidate is
    /// rejected before anything is emitted or saved, and the registered
    /// notice is skipped when the save fails.
    pub async fn register(&self, ninja: &Ninja) -> Result<(), AppError> {
        eligibility::check_registration(ninja)?;

        tracing::info!(name = %ninja.name, "Processing ninja registration");

        self.store.save(ninja).await?;

        tracing::info!(
            name = %ninja.name,
            village = %ninja.village,
            "Ninja registered"
        );

        Ok(())
    }

    /// Promote a ninja
    ///
    /// Only Leaf ninjas of promotion age qualify; the village rule is
    /// checked first. Promotion emits a notice but persists nothing, and
    /// prior registration is not required.
    pub fn promote(&self, ninja: &Ninja) -> Result<(), AppError> {
        eligibility::check_promotion(ninja)?;

        tracing::info!(name = %ninja.name, clan = %ninja.clan, "Ninja promoted");

        Ok(())
    }

    /// Check whether this ninja is cleared for dangerous missions
    ///
    /// Never fails; ineligibility only shows in the returned bool.
    pub fn can_go_on_dangerous_mission(&self, ninja: &Ninja) -> bool {
        let cleared = eligibility::mission_clearance(ninja);

        if cleared {
            tracing::info!(name = %ninja.name, "Cleared for dangerous missions");
        } else {
            tracing::info!(name = %ninja.name, "Not yet cleared for dangerous missions");
        }

        cleared
    }
}
