//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod mailer;
pub mod store;

pub use mailer::Mailer;
pub use store::EntityStore;
