//! The travel accumulator.
//!
//! A [`TravelAccumulator`] follows one accumulation episode: the span
//! between a start marker (or the first event ever seen) and the next stop
//! marker. Inside an episode it keeps the jump ledger and the in-game time
//! spent, bridging game restarts by only counting time while a session is
//! open.
//!
//! # Sessions
//!
//! ```text
//! LoadGame(t0) .. Shutdown(t3) .. LoadGame(t4) .. now
//!  |----- counted -----|  gap  |----- counted -----|
//! ```
//!
//! A shutdown folds the time since the last load into the running total, up
//! to the last event before the shutdown. A load reopens the session; a
//! second load while one is open is ignored.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use tracing::trace;

use starlog_types::{Event, EventKind};

use crate::jump::{Jump, TravelSummary};
use crate::LedgerError;

/// Distance and time travelled in one accumulation episode.
///
/// Values are immutable snapshots: [`update`] consumes the previous snapshot
/// and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelAccumulator {
    travelling: bool,
    generation: u64,
    start: Option<DateTime<Utc>>,
    stop: Option<DateTime<Utc>>,
    jumps: Vec<Jump>,
    missing_count: usize,
    elapsed_total: TimeDelta,
    session_start: Option<DateTime<Utc>>,
}

impl TravelAccumulator {
    /// An open episode starting at `start` with no session open.
    pub const fn open_at(start: DateTime<Utc>) -> Self {
        Self {
            travelling: true,
            generation: 0,
            start: Some(start),
            stop: None,
            jumps: Vec::new(),
            missing_count: 0,
            elapsed_total: TimeDelta::zero(),
            session_start: None,
        }
    }

    /// A closed, empty accumulator.
    pub const fn closed() -> Self {
        Self {
            travelling: false,
            generation: 0,
            start: None,
            stop: None,
            jumps: Vec::new(),
            missing_count: 0,
            elapsed_total: TimeDelta::zero(),
            session_start: None,
        }
    }

    /// Whether an episode is open.
    pub const fn is_travelling(&self) -> bool {
        self.travelling
    }

    /// Counter that changes every time an episode is reset. Two snapshots
    /// with the same generation belong to the same episode.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// When the current episode started.
    pub const fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    /// When the last episode was stopped, for a closed accumulator.
    pub const fn stop(&self) -> Option<DateTime<Utc>> {
        self.stop
    }

    /// The jump ledger, oldest first.
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// Number of jumps recorded without a usable distance.
    pub const fn missing_count(&self) -> usize {
        self.missing_count
    }

    /// In-game time folded in from completed sessions.
    pub const fn elapsed_total(&self) -> TimeDelta {
        self.elapsed_total
    }

    /// When the open session was loaded, if one is open.
    pub const fn session_start(&self) -> Option<DateTime<Utc>> {
        self.session_start
    }

    /// Total in-game time at `now`, counting the open session up to `now`.
    pub fn running_time(&self, now: DateTime<Utc>) -> TimeDelta {
        self.elapsed_total
            .checked_add(&self.open_session_time(now))
            .unwrap_or(self.elapsed_total)
    }

    /// Index of the last jump at or before `t`. `None` when `t` precedes
    /// every jump.
    pub fn index_of(&self, t: DateTime<Utc>) -> Option<usize> {
        self.jumps
            .partition_point(|j| j.timestamp <= t)
            .checked_sub(1)
    }

    /// Jumps made at or before `t`.
    pub fn jumps_as_of(&self, t: DateTime<Utc>) -> &[Jump] {
        let end = self.index_of(t).map_or(0, |i| i.saturating_add(1));
        self.jumps.get(..end).unwrap_or_default()
    }

    /// Distance travelled at or before `t`.
    pub fn distance_as_of(&self, t: DateTime<Utc>) -> Decimal {
        self.jumps_as_of(t)
            .last()
            .map_or(Decimal::ZERO, |j| j.cumulative_distance)
    }

    /// In-game time recorded by the last jump at or before `t`.
    pub fn elapsed_time_as_of(&self, t: DateTime<Utc>) -> TimeDelta {
        self.jumps_as_of(t)
            .last()
            .map_or_else(TimeDelta::zero, |j| j.cumulative_time)
    }

    /// Totals at or before `t`.
    pub fn summary_as_of(&self, t: DateTime<Utc>) -> TravelSummary {
        TravelSummary::of(self.start, self.jumps_as_of(t))
    }

    /// Apply one event in place.
    ///
    /// The accumulator is left untouched when an error is returned, so a
    /// caller may skip the event and carry on with the same value. See
    /// [`update`] for the previous-event contract.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] only if a running total overflows.
    pub fn apply(&mut self, previous: Option<&Event>, current: &Event) -> Result<(), LedgerError> {
        let t = current.timestamp;

        if !self.travelling {
            if matches!(current.kind, EventKind::StartMarker) {
                let mut next = Self::open_at(t);
                next.session_start = Some(t);
                self.reset(next);
            }
            return Ok(());
        }

        match &current.kind {
            EventKind::StopMarker => {
                self.reset(Self {
                    stop: Some(t),
                    ..Self::closed()
                });
            }
            EventKind::Shutdown => {
                let until = previous.map_or(t, |p| p.timestamp);
                self.elapsed_total = self.folded_total(until)?;
                self.session_start = None;
            }
            EventKind::LoadGame(_) => {
                if self.session_start.is_none() {
                    self.session_start = Some(t);
                }
            }
            EventKind::FsdJump(jump) if !jump.multicrew => self.record_jump(t, jump.jump_dist)?,
            _ => {}
        }
        Ok(())
    }

    fn open_session_time(&self, now: DateTime<Utc>) -> TimeDelta {
        self.session_start
            .map_or_else(TimeDelta::zero, |loaded| non_negative(now.signed_duration_since(loaded)))
    }

    /// The elapsed total with the open session, measured up to `until`,
    /// folded in.
    fn folded_total(&self, until: DateTime<Utc>) -> Result<TimeDelta, LedgerError> {
        self.elapsed_total
            .checked_add(&self.open_session_time(until))
            .ok_or(LedgerError::TimeOverflow)
    }

    fn record_jump(&mut self, at: DateTime<Utc>, distance: Decimal) -> Result<(), LedgerError> {
        let previous = self
            .jumps
            .last()
            .map_or(Decimal::ZERO, |j| j.cumulative_distance);
        let missing = distance <= Decimal::ZERO;
        let contribution = if missing { Decimal::ZERO } else { distance };
        let cumulative_distance = previous
            .checked_add(contribution)
            .ok_or(LedgerError::DistanceOverflow { distance })?;
        let cumulative_time = self.folded_total(at)?;
        if missing {
            self.missing_count = self.missing_count.saturating_add(1);
        }
        trace!(%at, %cumulative_distance, missing, "recorded jump");
        self.jumps.push(Jump {
            timestamp: at,
            cumulative_distance,
            cumulative_time,
            distance_missing: missing,
        });
        Ok(())
    }

    fn reset(&mut self, next: Self) {
        let generation = self.generation.saturating_add(1);
        *self = Self { generation, ..next };
    }
}

fn non_negative(delta: TimeDelta) -> TimeDelta {
    if delta < TimeDelta::zero() {
        TimeDelta::zero()
    } else {
        delta
    }
}

/// Apply one event to the accumulator.
///
/// `state` is the snapshot after `previous`; `None` before the first event,
/// in which case an open episode is started at `current`'s time. `previous`
/// is only consulted by a shutdown, whose session is counted up to the last
/// event written before it.
///
/// # Errors
///
/// Returns [`LedgerError`] only if a running total overflows.
pub fn update(
    state: Option<TravelAccumulator>,
    previous: Option<&Event>,
    current: &Event,
) -> Result<TravelAccumulator, LedgerError> {
    let mut acc = match state {
        Some(acc) => acc,
        None if matches!(current.kind, EventKind::StartMarker) => TravelAccumulator::closed(),
        None => TravelAccumulator::open_at(current.timestamp),
    };
    acc.apply(previous, current)?;
    Ok(acc)
}
