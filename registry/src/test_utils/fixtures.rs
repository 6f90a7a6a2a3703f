//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Ninja, User};

/// A valid ninja: of age, Leaf village, elite clan
pub fn test_ninja() -> Ninja {
    Ninja::new("Naruto", "Leaf", "Uzumaki", 16)
}

/// The default ninja at a specific age
pub fn test_ninja_aged(age: u32) -> Ninja {
    Ninja::new("Naruto", "Leaf", "Uzumaki", age)
}

/// A Leaf ninja of age from the given clan
pub fn test_ninja_of_clan(clan: &str) -> Ninja {
    Ninja::new("Shikamaru", "Leaf", clan, 16)
}

/// A ninja from a village the local promotion rules do not cover
pub fn sound_ninja() -> Ninja {
    Ninja::new("Sasuke", "Sound", "Uchiha", 20)
}

/// A user ready to register
pub fn test_user() -> User {
    User::new("Cristian Silva", "cristian@email.com")
}
