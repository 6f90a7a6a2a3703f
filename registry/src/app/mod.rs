//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod eligibility;
pub mod ninja_service;
pub mod user_service;

pub use ninja_service::NinjaService;
pub use user_service::UserService;
