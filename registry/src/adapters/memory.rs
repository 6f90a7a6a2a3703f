//! In-memory entity store
//!
//! List-backed implementation of [`EntityStore`]. Saves append in call
//! order; the saved list and save count are exposed so the demo can dump
//! the roster and tests can assert on persistence.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::EntityStore;
use crate::error::StoreError;

/// Store that keeps saved entities in a shared in-memory list
pub struct InMemoryStore<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves performed so far
    pub fn save_count(&self) -> usize {
        self.entities.read().unwrap().len()
    }
}

impl<E: Clone> InMemoryStore<E> {
    /// Snapshot of the saved entities, in save order
    pub fn saved(&self) -> Vec<E> {
        self.entities.read().unwrap().clone()
    }
}

// Manual impl: a derived Default would add an E: Default bound
impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl<E> EntityStore<E> for InMemoryStore<E>
where
    E: Clone + Send + Sync,
{
    async fn save(&self, entity: &E) -> Result<(), StoreError> {
        self.entities
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?
            .push(entity.clone());

        Ok(())
    }
}
