//! Traits for statement data access abstraction

use async_trait::async_trait;

use crate::types::*;

/// Data-access abstraction for statement material
///
/// This trait lets the reconciliation core pull movements and checkpoints
/// from any backend (PostgreSQL, MySQL, SQLite, in-memory, a parsed bank
/// file, etc.) by implementing these two methods.
#[async_trait]
pub trait StatementSource: Send + Sync {
    /// Fetch the movements to validate
    async fn movements(&self) -> ReconciliationResult<Vec<Movement>>;

    /// Fetch the balance checkpoints covering the statement period
    async fn checkpoints(&self) -> ReconciliationResult<Vec<Checkpoint>>;
}
