//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks are explicit and configured per test, with no macro magic.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
