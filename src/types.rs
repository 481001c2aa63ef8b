//! Core types and data structures for movement reconciliation

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single ledger movement to be validated
///
/// Movements are immutable inputs: the engine never mutates or reorders the
/// caller's sequence, it only works on internal sorted copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Externally assigned identifier (not guaranteed unique)
    pub id: i64,
    /// When the movement occurred; naive timestamps, compared as-is
    pub date: NaiveDateTime,
    /// Free-form operation label (counterparty, memo, etc.)
    pub label: String,
    /// Signed amount: positive for credits, negative for debits
    pub amount: BigDecimal,
}

impl Movement {
    /// Create a new movement
    pub fn new(id: i64, date: NaiveDateTime, label: String, amount: BigDecimal) -> Self {
        Self {
            id,
            date,
            label,
            amount,
        }
    }
}

/// An attested account balance as of a specific date
///
/// Checkpoints are the reconciliation anchors: consecutive checkpoints bound
/// the intervals whose movement sums must reproduce the attested balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Date the balance was attested
    pub date: NaiveDateTime,
    /// Attested running balance as of `date`
    pub balance: BigDecimal,
}

impl Checkpoint {
    /// Create a new checkpoint
    pub fn new(date: NaiveDateTime, balance: BigDecimal) -> Self {
        Self { date, balance }
    }
}

/// Request envelope a transport layer deserializes before invoking the engine
///
/// The checkpoint list travels under the wire name `balances`. Deserializing
/// through serde rejects bodies with missing or mistyped fields, so everything
/// that reaches the engine is already well-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Movements to validate
    pub movements: Vec<Movement>,
    /// Balance checkpoints covering the statement period
    pub balances: Vec<Checkpoint>,
}

/// Human-readable message catalog for validation findings
///
/// Each variant serializes to its exact wire string. The two unverifiable
/// messages distinguish the zero-checkpoint and single-checkpoint causes;
/// the two mismatch messages sub-classify a balance mismatch by the sign of
/// the computed-minus-expected delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonMessage {
    /// A movement repeats an earlier (date, amount, label) triple
    #[serde(rename = "Duplicate operation")]
    Duplicate,
    /// Computed balance exceeds the attested one
    #[serde(rename = "Possible duplicate or incorrect movement(s)")]
    PositiveBalanceMismatch,
    /// Computed balance falls short of the attested one
    #[serde(rename = "Possible missing movement(s)")]
    NegativeBalanceMismatch,
    /// A movement falls outside the checkpoint-covered period
    #[serde(rename = "Movement out of bounds")]
    OutOfBounds,
    /// No balance checkpoint available at all
    #[serde(rename = "Unverifiable movements, no balance check point available")]
    NoCheckpoint,
    /// A single checkpoint cannot bound any interval
    #[serde(rename = "Unverifiable movements, only one balance check point available")]
    OnlyOneCheckpoint,
}

impl ReasonMessage {
    /// The exact wire string for this message
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonMessage::Duplicate => "Duplicate operation",
            ReasonMessage::PositiveBalanceMismatch => "Possible duplicate or incorrect movement(s)",
            ReasonMessage::NegativeBalanceMismatch => "Possible missing movement(s)",
            ReasonMessage::OutOfBounds => "Movement out of bounds",
            ReasonMessage::NoCheckpoint => {
                "Unverifiable movements, no balance check point available"
            }
            ReasonMessage::OnlyOneCheckpoint => {
                "Unverifiable movements, only one balance check point available"
            }
        }
    }
}

impl std::fmt::Display for ReasonMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the movement a finding is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRef {
    /// Id of the offending movement
    pub movement_id: i64,
}

/// Payload of a balance mismatch between two consecutive checkpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceMismatchDetails {
    /// Date of the checkpoint opening the interval
    pub balance_start_date: NaiveDateTime,
    /// Date of the checkpoint closing the interval
    pub balance_end_date: NaiveDateTime,
    /// Balance attested by the closing checkpoint
    pub expected_final_balance: BigDecimal,
    /// Opening balance plus the sum of the interval's movements
    pub calculated_final_balance: BigDecimal,
}

/// A single classified validation finding
///
/// Serialized with a `type` discriminant, so the wire shape is
/// `{"type": .., "message": .., "details": {..}}`. `Unverifiable` carries
/// no `details` key. The variant set is closed and consumers can match
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reason {
    /// Movement dated outside the checkpoint-covered period
    #[serde(rename = "OUT_OF_BOUNDS")]
    OutOfBounds {
        message: ReasonMessage,
        details: MovementRef,
    },
    /// Movement repeating an earlier (date, amount, label) triple
    #[serde(rename = "DUPLICATE")]
    Duplicate {
        message: ReasonMessage,
        details: MovementRef,
    },
    /// Interval movement sum failing to reproduce the closing checkpoint
    #[serde(rename = "BALANCE_MISMATCH")]
    BalanceMismatch {
        message: ReasonMessage,
        details: BalanceMismatchDetails,
    },
    /// Fewer than two checkpoints: reconciliation is impossible
    #[serde(rename = "UNVERIFIABLE_MOVEMENTS")]
    Unverifiable { message: ReasonMessage },
}

impl Reason {
    /// Duplicate finding for the given movement
    pub fn duplicate(movement_id: i64) -> Self {
        Reason::Duplicate {
            message: ReasonMessage::Duplicate,
            details: MovementRef { movement_id },
        }
    }

    /// Out-of-bounds finding for the given movement
    pub fn out_of_bounds(movement_id: i64) -> Self {
        Reason::OutOfBounds {
            message: ReasonMessage::OutOfBounds,
            details: MovementRef { movement_id },
        }
    }

    /// Mismatch finding for the interval between `start` and `end`
    ///
    /// The message sub-classifies by the sign of `calculated - end.balance`:
    /// a shortfall points at missing movements, an excess at duplicate or
    /// incorrect ones.
    pub fn balance_mismatch(start: &Checkpoint, end: &Checkpoint, calculated: BigDecimal) -> Self {
        let message = if calculated < end.balance {
            ReasonMessage::NegativeBalanceMismatch
        } else {
            ReasonMessage::PositiveBalanceMismatch
        };
        Reason::BalanceMismatch {
            message,
            details: BalanceMismatchDetails {
                balance_start_date: start.date,
                balance_end_date: end.date,
                expected_final_balance: end.balance.clone(),
                calculated_final_balance: calculated,
            },
        }
    }

    /// Unverifiable-data finding with the given sub-case message
    pub fn unverifiable(message: ReasonMessage) -> Self {
        Reason::Unverifiable { message }
    }

    /// The human-readable message attached to this finding
    pub fn message(&self) -> ReasonMessage {
        match self {
            Reason::OutOfBounds { message, .. }
            | Reason::Duplicate { message, .. }
            | Reason::BalanceMismatch { message, .. }
            | Reason::Unverifiable { message } => *message,
        }
    }
}

/// Top-level verdict of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseMessage {
    /// Every check passed
    #[serde(rename = "Accepted")]
    Accepted,
    /// At least one finding was emitted
    #[serde(rename = "Validation failed")]
    ValidationFailed,
}

impl ResponseMessage {
    /// The exact wire string for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMessage::Accepted => "Accepted",
            ResponseMessage::ValidationFailed => "Validation failed",
        }
    }
}

impl std::fmt::Display for ResponseMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one reconciliation run
///
/// `reasons` is `None` exactly when the verdict is `Accepted`, and the field
/// is omitted from the serialized form in that case. Use the constructors to
/// keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Overall verdict
    pub message: ResponseMessage,
    /// Findings in emission order: per-movement findings first, then
    /// per-interval mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,
}

impl ValidationReport {
    /// Report for a run where every check passed
    pub fn accepted() -> Self {
        Self {
            message: ResponseMessage::Accepted,
            reasons: None,
        }
    }

    /// Report carrying the findings of a failed run
    pub fn failed(reasons: Vec<Reason>) -> Self {
        Self {
            message: ResponseMessage::ValidationFailed,
            reasons: Some(reasons),
        }
    }

    /// Whether the run passed without findings
    pub fn is_accepted(&self) -> bool {
        self.message == ResponseMessage::Accepted
    }

    /// Number of findings carried by this report
    pub fn reason_count(&self) -> usize {
        self.reasons.as_ref().map_or(0, Vec::len)
    }
}

/// Errors that can occur in the plumbing around the reconciliation core
///
/// Data-quality anomalies are never errors: they come back as [`Reason`]
/// values inside an ordinary report. Only the layers that deliver data to
/// the engine can fail.
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Source error: {0}")]
    Source(String),
}

/// Result type for reconciliation plumbing operations
pub type ReconciliationResult<T> = Result<T, ReconciliationError>;
