//! Adapters layer
//!
//! Implementations of port traits.

pub mod mailer;
pub mod memory;

pub use mailer::LogMailer;
pub use memory::InMemoryStore;
