//! The reconciliation engine
//!
//! Pure validation logic: sorting, the verifiability gate, duplicate and
//! bounds detection, and per-interval balance verification. No I/O happens
//! here; feeding the engine is the caller's (or [`crate::reconciliation::service`]'s) job.

use std::collections::HashSet;

use bigdecimal::BigDecimal;

use crate::types::*;

/// Cross-checks movements against balance checkpoints
///
/// The engine is stateless apart from its tolerance: the same inputs always
/// produce the same report, and no call mutates the caller's data.
pub struct ReconciliationEngine {
    /// Absolute bound on an acceptable balance delta; a mismatch is reported
    /// only when `|calculated - expected|` strictly exceeds it
    tolerance: BigDecimal,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Engine with the standard one-cent tolerance
    pub fn new() -> Self {
        Self {
            tolerance: BigDecimal::from(1) / BigDecimal::from(100),
        }
    }

    /// Engine with a caller-chosen mismatch tolerance
    pub fn with_tolerance(tolerance: BigDecimal) -> Self {
        Self { tolerance }
    }

    /// Validate movements against balance checkpoints
    ///
    /// Inputs may arrive in any order; both lists are sorted internally by
    /// date, and ties keep their input order. With fewer than two checkpoints
    /// the run is unverifiable and a single reason is returned. Otherwise the
    /// report carries every finding: duplicates and out-of-bounds movements
    /// in sorted movement order (duplicate before out-of-bounds when one
    /// movement triggers both), then one balance mismatch per inconsistent
    /// checkpoint interval in interval order.
    pub fn validate(&self, movements: &[Movement], checkpoints: &[Checkpoint]) -> ValidationReport {
        let mut sorted_movements: Vec<&Movement> = movements.iter().collect();
        sorted_movements.sort_by(|a, b| a.date.cmp(&b.date));

        let mut sorted_checkpoints: Vec<&Checkpoint> = checkpoints.iter().collect();
        sorted_checkpoints.sort_by(|a, b| a.date.cmp(&b.date));

        // Fewer than two checkpoints bound no interval at all, so nothing
        // can be verified. This outranks every other finding.
        if sorted_checkpoints.len() < 2 {
            let message = if sorted_checkpoints.is_empty() {
                ReasonMessage::NoCheckpoint
            } else {
                ReasonMessage::OnlyOneCheckpoint
            };
            return ValidationReport::failed(vec![Reason::unverifiable(message)]);
        }

        let first_date = sorted_checkpoints[0].date;
        let last_date = sorted_checkpoints[sorted_checkpoints.len() - 1].date;

        let mut reasons = Vec::new();

        // One pass over the sorted movements for duplicates and bounds.
        // Amounts are keyed in normalized form so scale does not matter:
        // 25.10 and 25.1 are the same operation.
        let mut seen = HashSet::new();
        for movement in &sorted_movements {
            let key = (
                movement.date,
                movement.amount.clone().normalized().to_string(),
                movement.label.clone(),
            );
            if !seen.insert(key) {
                reasons.push(Reason::duplicate(movement.id));
            }
            if movement.date < first_date || movement.date > last_date {
                reasons.push(Reason::out_of_bounds(movement.id));
            }
        }

        // Replay each interval [start, end): opening balance plus the sum of
        // the movements dated inside it must land on the closing balance.
        // The cursor is shared across intervals and never rewinds, so each
        // movement is consumed exactly once; anything consumed before the
        // interval opens (only possible ahead of the first checkpoint) is
        // skipped without being summed.
        let mut cursor = 0;
        for window in sorted_checkpoints.windows(2) {
            let (start, end) = (window[0], window[1]);

            let mut interval_sum = BigDecimal::from(0);
            while cursor < sorted_movements.len() && sorted_movements[cursor].date < end.date {
                if sorted_movements[cursor].date >= start.date {
                    interval_sum += &sorted_movements[cursor].amount;
                }
                cursor += 1;
            }

            let calculated = &start.balance + &interval_sum;
            let delta = &calculated - &end.balance;
            if delta.abs() > self.tolerance {
                reasons.push(Reason::balance_mismatch(start, end, calculated));
            }
        }

        if reasons.is_empty() {
            ValidationReport::accepted()
        } else {
            ValidationReport::failed(reasons)
        }
    }

    /// Validate a deserialized request envelope
    pub fn validate_request(&self, request: &ValidationRequest) -> ValidationReport {
        self.validate(&request.movements, &request.balances)
    }
}

/// One-shot validation with the standard tolerance
pub fn reconcile(movements: &[Movement], checkpoints: &[Checkpoint]) -> ValidationReport {
    ReconciliationEngine::new().validate(movements, checkpoints)
}
