//! The reconstructed history.
//!
//! A [`Timeline`] is an append-only sequence of [`TimelineEntry`] values,
//! one per emitted event. Each entry owns its event and travel snapshot.
//! Accumulator snapshots are stored once per accumulation episode: within
//! an episode the jump ledger only grows, so the latest snapshot answers
//! "as of entry X" for every entry of that episode.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

use starlog_ledger::{Jump, LedgerError, TravelAccumulator, TravelSummary};
use starlog_travel::TravelState;
use starlog_types::{Event, EventKind};

/// One committed step of the history.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    /// Position in the timeline, starting at zero.
    pub index: usize,
    /// The emitted event, including any records it absorbed.
    pub event: Event,
    /// Travel state after this event.
    pub travel: TravelState,
    /// Index into [`Timeline::episodes`] of the accumulator covering this
    /// entry.
    pub episode: usize,
    /// Whether an accumulation episode was open after this event.
    pub travelling: bool,
    /// Display name for the ship, body or suit this event concerns.
    pub display_name: Option<String>,
}

/// Ordered, append-only reconstruction of player state over time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    episodes: Vec<TravelAccumulator>,
}

impl Timeline {
    /// Create an empty timeline.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            episodes: Vec::new(),
        }
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }

    /// Accumulator snapshots, one per episode, oldest first.
    pub fn episodes(&self) -> &[TravelAccumulator] {
        &self.episodes
    }

    /// The accumulator covering the entry at `index`.
    pub fn accumulator_at(&self, index: usize) -> Option<&TravelAccumulator> {
        self.entries
            .get(index)
            .and_then(|entry| self.episodes.get(entry.episode))
    }

    /// Jumps made up to and including the entry at `index`.
    pub fn jumps_as_of(&self, index: usize) -> &[Jump] {
        self.as_of(index)
            .map(|(acc, t)| acc.jumps_as_of(t))
            .unwrap_or_default()
    }

    /// Distance travelled up to and including the entry at `index`.
    pub fn distance_as_of(&self, index: usize) -> Decimal {
        self.as_of(index)
            .map_or(Decimal::ZERO, |(acc, t)| acc.distance_as_of(t))
    }

    /// In-game time recorded up to and including the entry at `index`.
    pub fn elapsed_time_as_of(&self, index: usize) -> TimeDelta {
        self.as_of(index)
            .map_or_else(TimeDelta::zero, |(acc, t)| acc.elapsed_time_as_of(t))
    }

    /// Travel totals up to and including the entry at `index`.
    pub fn summary_as_of(&self, index: usize) -> TravelSummary {
        self.as_of(index)
            .map_or_else(|| TravelSummary::empty(None), |(acc, t)| acc.summary_as_of(t))
    }

    /// Whether the most recent state has a hyperspace charge older than
    /// `grace` at `now`.
    pub fn jump_overdue(&self, now: DateTime<Utc>, grace: TimeDelta) -> bool {
        self.last()
            .is_some_and(|entry| entry.travel.jump_overdue(now, grace))
    }

    fn as_of(&self, index: usize) -> Option<(&TravelAccumulator, DateTime<Utc>)> {
        let entry = self.entries.get(index)?;
        let acc = self.episodes.get(entry.episode)?;
        Some((acc, entry.event.timestamp))
    }

    /// Advance the current accumulator over `current` and return the index
    /// of the episode it now belongs to. `current` follows the last entry.
    ///
    /// On error nothing is changed.
    pub(crate) fn accumulate(&mut self, current: &Event) -> Result<usize, LedgerError> {
        let previous = self.entries.last().map(|entry| &entry.event);
        let resets = matches!(current.kind, EventKind::StartMarker | EventKind::StopMarker);
        match self.episodes.last_mut() {
            Some(acc) if !resets => acc.apply(previous, current)?,
            Some(acc) => {
                let next = starlog_ledger::update(Some(acc.clone()), previous, current)?;
                if next.generation() == acc.generation() {
                    *acc = next;
                } else {
                    self.episodes.push(next);
                }
            }
            None => self
                .episodes
                .push(starlog_ledger::update(None, previous, current)?),
        }
        Ok(self.episodes.len().saturating_sub(1))
    }

    /// Append an entry. The entry's index is assigned here.
    pub(crate) fn push(&mut self, mut entry: TimelineEntry) -> usize {
        let index = self.entries.len();
        entry.index = index;
        self.entries.push(entry);
        index
    }
}
