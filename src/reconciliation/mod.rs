//! Reconciliation of bank movements against balance checkpoints
//!
//! The engine cross-checks a list of movements against attested balance
//! checkpoints and reports every anomaly it finds: duplicates, movements
//! outside the covered period, and per-interval balance mismatches. The
//! service wrapper runs the same engine over any [`crate::traits::StatementSource`].

pub mod engine;
pub mod service;

pub use engine::{reconcile, ReconciliationEngine};
pub use service::Reconciler;
