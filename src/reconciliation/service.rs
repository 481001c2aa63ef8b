//! Source-backed reconciliation service

use crate::reconciliation::engine::ReconciliationEngine;
use crate::traits::StatementSource;
use crate::types::*;

/// Runs the reconciliation engine over any [`StatementSource`]
///
/// The service owns a source and an engine; [`Reconciler::run`] pulls both
/// halves of the statement and hands them to the engine. Source failures
/// surface as [`ReconciliationError::Source`], never as validation findings.
pub struct Reconciler<S: StatementSource> {
    source: S,
    engine: ReconciliationEngine,
}

impl<S: StatementSource> Reconciler<S> {
    /// Create a reconciler over the given source with the standard tolerance
    pub fn new(source: S) -> Self {
        Self {
            source,
            engine: ReconciliationEngine::new(),
        }
    }

    /// Create a reconciler with a caller-configured engine
    pub fn with_engine(source: S, engine: ReconciliationEngine) -> Self {
        Self { source, engine }
    }

    /// Fetch the statement from the source and validate it
    pub async fn run(&self) -> ReconciliationResult<ValidationReport> {
        let movements = self.source.movements().await?;
        let checkpoints = self.source.checkpoints().await?;
        Ok(self.engine.validate(&movements, &checkpoints))
    }

    /// Access the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }
}
