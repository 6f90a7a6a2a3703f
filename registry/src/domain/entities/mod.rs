//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod ninja;
pub mod user;

pub use ninja::{Ninja, LEAF_VILLAGE};
// Re-export the clan vocabulary for domain consumers
#[allow(unused_imports)]
pub use ninja::EliteClan;
pub use user::User;
