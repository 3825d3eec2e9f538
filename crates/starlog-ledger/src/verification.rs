//! Monotonicity verification for the jump ledger.
//!
//! Within one episode every jump must be at or after the previous one in
//! time, and cumulative distance and cumulative time must never decrease.
//! The accumulator guarantees this by construction for in-order input; the
//! check exists to catch input that was not in timestamp order.

use crate::jump::Jump;
use crate::LedgerAnomaly;

/// The result of a monotonicity check over a jump ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonotonicityResult {
    /// Every cumulative value is non-decreasing.
    Monotonic,
    /// At least one jump goes backwards.
    Anomaly(LedgerAnomaly),
}

/// Verify that timestamps, cumulative distance and cumulative time are
/// non-decreasing. Reports the first offending jump.
pub fn verify_jumps(jumps: &[Jump]) -> MonotonicityResult {
    for (offset, pair) in jumps.windows(2).enumerate() {
        let [before, after] = pair else {
            continue;
        };
        let index = offset.saturating_add(1);
        let field = if after.timestamp < before.timestamp {
            Some("timestamp")
        } else if after.cumulative_distance < before.cumulative_distance {
            Some("cumulative distance")
        } else if after.cumulative_time < before.cumulative_time {
            Some("cumulative time")
        } else {
            None
        };
        if let Some(field) = field {
            return MonotonicityResult::Anomaly(LedgerAnomaly {
                index,
                message: format!("jump {index}: {field} decreased"),
            });
        }
    }
    MonotonicityResult::Monotonic
}
