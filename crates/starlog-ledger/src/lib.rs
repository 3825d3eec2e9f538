//! Travel accumulator and jump ledger for the Starlog history engine.
//!
//! Tracks how far and for how long the player has travelled since an
//! explicit start marker, across any number of game restarts. Every
//! hyperspace jump appends a [`Jump`] with running totals, so "how far had
//! I gone at entry X" is a lookup rather than a replay.
//!
//! # Architecture
//!
//! - [`accumulator`] -- The [`TravelAccumulator`] and its [`update`] function
//! - [`jump`] -- [`Jump`] records and [`TravelSummary`]
//! - [`verification`] -- Monotonicity checks over a jump ledger
//!
//! # Precision
//!
//! Distances are [`Decimal`] light years, so `12.3 + 8.0` is exactly
//! `20.3`. Times are [`chrono::TimeDelta`]. The accumulator never panics;
//! an overflowing total is reported as a [`LedgerError`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rust_decimal::Decimal;
//! use starlog_ledger::update;
//! use starlog_types::{Event, EventId, EventKind, FsdJump, LoadGame};
//!
//! let t0 = Utc.timestamp_opt(1_650_000_000, 0).single().unwrap_or_default();
//! let t1 = Utc.timestamp_opt(1_650_000_090, 0).single().unwrap_or_default();
//! let load = Event::new(EventId::new(1), t0, EventKind::LoadGame(LoadGame::default()));
//! let jump = Event::new(
//!     EventId::new(2),
//!     t1,
//!     EventKind::FsdJump(FsdJump { jump_dist: Decimal::new(123, 1), ..FsdJump::default() }),
//! );
//!
//! let acc = update(None, None, &load).ok();
//! let acc = acc.and_then(|acc| update(Some(acc), Some(&load), &jump).ok());
//! assert_eq!(acc.map(|a| a.distance_as_of(t1)), Some(Decimal::new(123, 1)));
//! ```

pub mod accumulator;
pub mod jump;
pub mod verification;

pub use accumulator::{update, TravelAccumulator};
pub use jump::{Jump, TravelSummary};
pub use verification::{verify_jumps, MonotonicityResult};

use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while accumulating travel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// Adding a jump distance overflowed the cumulative distance.
    #[error("cumulative distance overflowed adding {distance} ly")]
    DistanceOverflow {
        /// The distance being added.
        distance: Decimal,
    },

    /// Adding session time overflowed the elapsed total.
    #[error("cumulative elapsed time overflowed")]
    TimeOverflow,
}

// ---------------------------------------------------------------------------
// Anomaly type
// ---------------------------------------------------------------------------

/// A monotonicity violation found in a jump ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerAnomaly {
    /// Index of the first jump that goes backwards.
    pub index: usize,
    /// Human-readable description of the anomaly.
    pub message: String,
}

impl core::fmt::Display for LedgerAnomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}
