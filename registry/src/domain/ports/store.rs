//! Persistence port trait
//!
//! Defines the interface for entity persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::error::StoreError;

/// Store for entity records
///
/// The contract is a single save operation that either succeeds or fails
/// with a [`StoreError`]. Uniqueness, updates, and retrieval are not part
/// of it.
#[async_trait]
pub trait EntityStore<E>: Send + Sync {
    /// Persist one entity
    async fn save(&self, entity: &E) -> Result<(), StoreError>;
}
