//! # Reconciliation Core
//!
//! A bank-movement reconciliation library that validates scraped or imported
//! movements against attested balance checkpoints and reports every anomaly
//! it can find.
//!
//! ## Features
//!
//! - **Duplicate detection**: operations repeating a (date, amount, label) triple are flagged individually
//! - **Coverage checks**: movements dated outside the checkpoint-covered period are reported
//! - **Balance verification**: every checkpoint interval is replayed with cent-level tolerance
//! - **Complete reporting**: one deterministic report carrying all findings, never just the first
//! - **Source abstraction**: database-agnostic design with trait-based statement sources
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{reconcile, Checkpoint, Movement};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let day = |d: u32| {
//!     NaiveDate::from_ymd_opt(2025, 6, d)
//!         .unwrap()
//!         .and_hms_opt(0, 0, 0)
//!         .unwrap()
//! };
//!
//! let movements = vec![Movement::new(
//!     1,
//!     day(2),
//!     "SALARY".to_string(),
//!     BigDecimal::from(900),
//! )];
//! let checkpoints = vec![
//!     Checkpoint::new(day(1), BigDecimal::from(1000)),
//!     Checkpoint::new(day(3), BigDecimal::from(1900)),
//! ];
//!
//! let report = reconcile(&movements, &checkpoints);
//! assert!(report.is_accepted());
//! ```

pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
