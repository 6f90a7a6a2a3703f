//! Eligibility rules
//!
//! Defines the age thresholds and the pure decision functions for ninja
//! registration, promotion, and dangerous-mission clearance. The services
//! call these and add notices and persistence on top.

use crate::domain::entities::{Ninja, LEAF_VILLAGE};
use crate::error::DomainError;

/// Minimum age to be registered at the academy
pub const MIN_REGISTRATION_AGE: u32 = 5;

/// Minimum age for promotion
pub const MIN_PROMOTION_AGE: u32 = 12;

/// Minimum age for dangerous-mission clearance
pub const MIN_MISSION_AGE: u32 = 15;

/// Check the registration rules, in order; the first violation wins
pub fn check_registration(ninja: &Ninja) -> Result<(), DomainError> {
    if ninja.name.is_empty() {
        return Err(DomainError::InvalidArgument("name is required".to_string()));
    }

    if ninja.age < MIN_REGISTRATION_AGE {
        return Err(DomainError::InvalidArgument(format!(
            "ninja must be at least {} years old to register",
            MIN_REGISTRATION_AGE
        )));
    }

    Ok(())
}

/// Check the promotion rules; the village check runs before the age check
pub fn check_promotion(ninja: &Ninja) -> Result<(), DomainError> {
    if !ninja.hails_from(LEAF_VILLAGE) {
        return Err(DomainError::InvalidState(
            "only ninjas from the Leaf village can be promoted here".to_string(),
        ));
    }

    if ninja.age < MIN_PROMOTION_AGE {
        return Err(DomainError::InvalidState(
            "ninja is too young for promotion".to_string(),
        ));
    }

    Ok(())
}

/// Dangerous-mission clearance: old enough and from an elite clan
///
/// A plain predicate; lacking clearance is not an error.
pub fn mission_clearance(ninja: &Ninja) -> bool {
    ninja.age >= MIN_MISSION_AGE && ninja.elite_clan().is_some()
}
