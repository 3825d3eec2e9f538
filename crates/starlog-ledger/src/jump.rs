//! Jump records and the summary derived from them.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

/// One hyperspace jump in the ledger.
///
/// Both cumulative values are measured from the start of the accumulation
/// episode the jump belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jump {
    /// When the jump completed.
    pub timestamp: DateTime<Utc>,
    /// Distance travelled in the episode up to and including this jump,
    /// in light years.
    pub cumulative_distance: Decimal,
    /// In-game time spent in the episode up to this jump.
    pub cumulative_time: TimeDelta,
    /// The log did not report a usable distance for this jump.
    pub distance_missing: bool,
}

/// Travel totals as of some instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelSummary {
    /// When the episode started, if one has.
    pub since: Option<DateTime<Utc>>,
    /// Number of jumps made.
    pub jumps: usize,
    /// Jumps whose distance was not reported.
    pub missing_distances: usize,
    /// Total distance in light years.
    pub distance: Decimal,
    /// Total in-game time.
    pub elapsed: TimeDelta,
}

impl TravelSummary {
    /// Summary of an empty slice of jumps.
    pub const fn empty(since: Option<DateTime<Utc>>) -> Self {
        Self {
            since,
            jumps: 0,
            missing_distances: 0,
            distance: Decimal::ZERO,
            elapsed: TimeDelta::zero(),
        }
    }

    /// Summarise a prefix of a jump ledger.
    pub fn of(since: Option<DateTime<Utc>>, jumps: &[Jump]) -> Self {
        let Some(last) = jumps.last() else {
            return Self::empty(since);
        };
        Self {
            since,
            jumps: jumps.len(),
            missing_distances: jumps.iter().filter(|j| j.distance_missing).count(),
            distance: last.cumulative_distance,
            elapsed: last.cumulative_time,
        }
    }
}

impl core::fmt::Display for TravelSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.elapsed.num_seconds();
        let hours = total.checked_div(3600).unwrap_or(0);
        let minutes = total.checked_rem(3600).and_then(|r| r.checked_div(60)).unwrap_or(0);
        write!(
            f,
            "{} jumps, {} ly in {}h{:02}m",
            self.jumps,
            self.distance.round_dp(2),
            hours,
            minutes
        )?;
        if self.missing_distances > 0 {
            write!(f, " ({} without distance)", self.missing_distances)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn summary_uses_last_jump() {
        let t = DateTime::<Utc>::default();
        let jumps = [
            Jump {
                timestamp: t,
                cumulative_distance: dec!(12.3),
                cumulative_time: TimeDelta::seconds(60),
                distance_missing: false,
            },
            Jump {
                timestamp: t,
                cumulative_distance: dec!(12.3),
                cumulative_time: TimeDelta::seconds(5_460),
                distance_missing: true,
            },
        ];
        let summary = TravelSummary::of(Some(t), &jumps);
        assert_eq!(summary.jumps, 2);
        assert_eq!(summary.missing_distances, 1);
        assert_eq!(summary.distance, dec!(12.3));
        assert_eq!(
            summary.to_string(),
            "2 jumps, 12.3 ly in 1h31m (1 without distance)"
        );
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = TravelSummary::of(None, &[]);
        assert_eq!(summary, TravelSummary::empty(None));
        assert_eq!(summary.to_string(), "0 jumps, 0 ly in 0h00m");
    }
}
