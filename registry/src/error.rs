//! Unified error types for the shinobi registry
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business rule errors
//! - `StoreError`: Persistence collaborator errors
//! - `MailError`: Welcome-mail collaborator errors
//! - `AppError`: Application layer errors returned by services

use thiserror::Error;

/// Domain layer errors - pure business rule errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Persistence errors
///
/// The store contract defines no failure modes of its own; anything the
/// backend reports surfaces as a single generic variant and propagates
/// unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage failure: {0}")]
    Backend(String),
}

/// Welcome-mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    /// The log-backed mailer never fails; real delivery channels report
    /// their failures through this variant
    #[allow(dead_code)]
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Application layer errors - returned by services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}
