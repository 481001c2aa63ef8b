//! In-memory statement source for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::StatementSource;
use crate::types::*;

/// In-memory statement source for testing and development
///
/// Clones share the underlying data, so a copy handed to a
/// [`crate::reconciliation::Reconciler`] still sees later pushes.
#[derive(Debug, Clone)]
pub struct MemorySource {
    movements: Arc<RwLock<Vec<Movement>>>,
    checkpoints: Arc<RwLock<Vec<Checkpoint>>>,
}

impl MemorySource {
    /// Create an empty memory source
    pub fn new() -> Self {
        Self {
            movements: Arc::new(RwLock::new(Vec::new())),
            checkpoints: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a memory source pre-loaded with a statement
    pub fn with_data(movements: Vec<Movement>, checkpoints: Vec<Checkpoint>) -> Self {
        Self {
            movements: Arc::new(RwLock::new(movements)),
            checkpoints: Arc::new(RwLock::new(checkpoints)),
        }
    }

    /// Add a movement
    pub fn push_movement(&self, movement: Movement) {
        self.movements.write().unwrap().push(movement);
    }

    /// Add a balance checkpoint
    pub fn push_checkpoint(&self, checkpoint: Checkpoint) {
        self.checkpoints.write().unwrap().push(checkpoint);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.movements.write().unwrap().clear();
        self.checkpoints.write().unwrap().clear();
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatementSource for MemorySource {
    async fn movements(&self) -> ReconciliationResult<Vec<Movement>> {
        Ok(self.movements.read().unwrap().clone())
    }

    async fn checkpoints(&self) -> ReconciliationResult<Vec<Checkpoint>> {
        Ok(self.checkpoints.read().unwrap().clone())
    }
}
