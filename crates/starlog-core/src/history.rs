//! The history assembly loop.
//!
//! [`HistoryBuilder`] drives one ordered batch of raw events through the
//! reconstruction pipeline. Each raw event goes through three gates before
//! the reorder queue:
//!
//! 1. **Discard** -- event types on the configured blacklist are dropped.
//! 2. **Repair** -- jumps naming a known-corrupt placeholder system are
//!    deleted from the persisted log and skipped.
//! 3. **Reorder** -- the queue decides what, if anything, is emitted now.
//!
//! Every emitted event then advances the travel state and the accumulator,
//! becomes a [`TimelineEntry`], and is announced to the [`HistorySink`].
//!
//! A failure on one event is logged, reported to the sink, and the event is
//! skipped. Nothing else in the batch is affected. [`build`] wraps the
//! builder for whole batches and honours a [`CancelFlag`].

use tracing::{debug, info, warn};

use starlog_events::ReorderQueue;
use starlog_ledger::{LedgerError, TravelAccumulator};
use starlog_travel::TravelState;
use starlog_types::{Event, EventId, EventKind, EventType};

use crate::cancel::CancelFlag;
use crate::collaborators::{CollaboratorError, EventLog, HistorySink, NameKind, RepairError};
use crate::config::{FilterConfig, StarlogConfig};
use crate::timeline::{Timeline, TimelineEntry};

// ---------------------------------------------------------------------------
// Errors and statistics
// ---------------------------------------------------------------------------

/// A per-event failure inside the assembly loop.
///
/// These never abort reconstruction. They are logged and handed to
/// [`HistorySink::report`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// The accumulator rejected the event.
    #[error("event {id} skipped: {source}")]
    Ledger {
        /// The skipped event.
        id: EventId,
        /// The accumulator failure.
        source: LedgerError,
    },

    /// A corrupt record could not be deleted from the log.
    #[error("corrupt event {id} could not be deleted: {source}")]
    Repair {
        /// The corrupt event.
        id: EventId,
        /// The log failure.
        source: RepairError,
    },

    /// The sink refused to index a record.
    #[error("event {id} not indexed: {source}")]
    Index {
        /// The unindexed event.
        id: EventId,
        /// The sink's reason.
        source: CollaboratorError,
    },

    /// A record to index has no known system to be filed under.
    #[error("event {id} not indexed: no current system")]
    NoSystem {
        /// The unindexed event.
        id: EventId,
    },
}

/// Counters describing one reconstruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    /// Raw events offered to the builder.
    pub raw: u64,
    /// Timeline entries committed.
    pub emitted: u64,
    /// Raw events dropped by the discard list.
    pub discarded: u64,
    /// Corrupt records deleted from the log.
    pub repaired: u64,
    /// Events skipped because of an error.
    pub failed: u64,
    /// Records the sink could not index.
    pub unindexed: u64,
}

/// Outcome of [`build`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// The reconstructed history.
    pub timeline: Timeline,
    /// What happened along the way.
    pub stats: HistoryStats,
    /// Whether the batch was cut short by cancellation.
    pub cancelled: bool,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Incremental history reconstruction.
///
/// Feed raw events in timestamp order with [`ingest`](Self::ingest), then
/// call [`finish`](Self::finish). The timeline is readable at any point in
/// between; events still held by the reorder queue are not in it yet.
#[derive(Debug)]
pub struct HistoryBuilder {
    filter: FilterConfig,
    queue: ReorderQueue,
    timeline: Timeline,
    stats: HistoryStats,
}

impl HistoryBuilder {
    /// Create a builder for the given configuration.
    pub fn new(config: &StarlogConfig) -> Self {
        Self {
            filter: config.filter.clone(),
            queue: ReorderQueue::new(config.reorder.queue_params()),
            timeline: Timeline::new(),
            stats: HistoryStats::default(),
        }
    }

    /// The timeline built so far.
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Counters so far.
    pub const fn stats(&self) -> HistoryStats {
        self.stats
    }

    /// Number of raw events held back by the reorder queue.
    pub fn pending(&self) -> usize {
        self.queue.pending_len()
    }

    /// Offer one raw event.
    pub fn ingest(&mut self, event: Event, sink: &mut dyn HistorySink, log: &mut dyn EventLog) {
        self.stats.raw = self.stats.raw.saturating_add(1);

        if self.filter.discard_events.contains(&event.event_type()) {
            debug!(id = %event.id, event = event.event_type().as_str(), "Discarded event");
            self.stats.discarded = self.stats.discarded.saturating_add(1);
            return;
        }

        if let Some(name) = self.corrupt_system(&event) {
            warn!(id = %event.id, system = name, "Deleting corrupt jump record");
            match log.delete_event(event.id) {
                Ok(()) => self.stats.repaired = self.stats.repaired.saturating_add(1),
                Err(source) => {
                    let err = HistoryError::Repair { id: event.id, source };
                    self.fail(&event, &err, sink);
                }
            }
            return;
        }

        for emitted in self.queue.push(event) {
            self.commit(emitted, sink);
        }
    }

    /// Flush the reorder queue and return the finished timeline.
    pub fn finish(self, sink: &mut dyn HistorySink) -> Timeline {
        self.finish_with_stats(sink).0
    }

    /// Like [`finish`](Self::finish), also returning the counters.
    pub fn finish_with_stats(mut self, sink: &mut dyn HistorySink) -> (Timeline, HistoryStats) {
        for emitted in self.queue.flush() {
            self.commit(emitted, sink);
        }
        (self.timeline, self.stats)
    }

    fn corrupt_system<'a>(&self, event: &'a Event) -> Option<&'a str> {
        match &event.kind {
            EventKind::FsdJump(jump)
                if self
                    .filter
                    .corrupt_system_names
                    .iter()
                    .any(|name| *name == jump.star_system) =>
            {
                Some(jump.star_system.as_str())
            }
            _ => None,
        }
    }

    /// Advance every derived state over one emitted event and append it.
    fn commit(&mut self, event: Event, sink: &mut dyn HistorySink) {
        let previous = self.timeline.last().map(|entry| &entry.travel);
        let travel = starlog_travel::update(previous, &event);
        let arrived = arrived(previous, &travel, &event);

        let episode = match self.timeline.accumulate(&event) {
            Ok(episode) => episode,
            Err(source) => {
                let err = HistoryError::Ledger { id: event.id, source };
                self.fail(&event, &err, sink);
                return;
            }
        };
        let travelling = self
            .timeline
            .episodes()
            .get(episode)
            .is_some_and(TravelAccumulator::is_travelling);

        if let Some(location) = travel.location.as_ref().filter(|_| arrived) {
            sink.register_visit(&location.system, event.timestamp);
        }
        if is_indexed(event.event_type()) {
            self.index(&event, &travel, sink);
        }
        let display_name =
            name_request(&event).and_then(|(kind, raw)| sink.resolve_name(kind, raw));

        self.timeline.push(TimelineEntry {
            index: 0,
            event,
            travel,
            episode,
            travelling,
            display_name,
        });
        self.stats.emitted = self.stats.emitted.saturating_add(1);
    }

    fn index(&mut self, event: &Event, travel: &TravelState, sink: &mut dyn HistorySink) {
        let Some(system) = event.star_system().or_else(|| travel.system_name()) else {
            let err = HistoryError::NoSystem { id: event.id };
            self.unindexed(event, &err, sink);
            return;
        };
        if let Err(source) = sink.index_record(system, event) {
            let err = HistoryError::Index { id: event.id, source };
            self.unindexed(event, &err, sink);
        }
    }

    fn unindexed(&mut self, event: &Event, err: &HistoryError, sink: &mut dyn HistorySink) {
        warn!(id = %event.id, %err, "Record not indexed");
        sink.report(event, &err.to_string());
        self.stats.unindexed = self.stats.unindexed.saturating_add(1);
    }

    fn fail(&mut self, event: &Event, err: &HistoryError, sink: &mut dyn HistorySink) {
        warn!(id = %event.id, %err, "Event skipped");
        sink.report(event, &err.to_string());
        self.stats.failed = self.stats.failed.saturating_add(1);
    }
}

// ---------------------------------------------------------------------------
// Notification rules
// ---------------------------------------------------------------------------

/// Whether `event` takes the player into a system worth recording a visit.
fn arrived(previous: Option<&TravelState>, travel: &TravelState, event: &Event) -> bool {
    let Some(now) = travel.location.as_ref().filter(|l| !l.system.name.is_empty()) else {
        return false;
    };
    if matches!(event.event_type(), EventType::FsdJump | EventType::CarrierJump) {
        return true;
    }
    previous
        .and_then(|p| p.location.as_ref())
        .is_none_or(|before| !before.system.same_system(&now.system))
}

const fn is_indexed(event_type: EventType) -> bool {
    matches!(
        event_type,
        EventType::Scan | EventType::SaaScanComplete | EventType::FssDiscoveryScan
    )
}

/// The identifier, if any, whose display name an entry should carry.
fn name_request(event: &Event) -> Option<(NameKind, &str)> {
    let request = match &event.kind {
        EventKind::LoadGame(d) => (NameKind::Ship, d.ship.as_str()),
        EventKind::Loadout(d) => (NameKind::Ship, d.ship.as_str()),
        EventKind::ShipyardSwap(d) => (NameKind::Ship, d.ship_type.as_str()),
        EventKind::ApproachBody(d) | EventKind::LeaveBody(d) => (NameKind::Body, d.body.as_str()),
        EventKind::Touchdown(d) | EventKind::Liftoff(d) => {
            (NameKind::Body, d.body.as_deref().unwrap_or_default())
        }
        EventKind::Scan(d) | EventKind::SaaScanComplete(d) => (NameKind::Body, d.body_name.as_str()),
        EventKind::SuitLoadout(d) | EventKind::SwitchSuitLoadout(d) => {
            (NameKind::Suit, d.suit_name.as_str())
        }
        _ => return None,
    };
    Some(request).filter(|(_, raw)| !raw.is_empty())
}

// ---------------------------------------------------------------------------
// Batch entry point
// ---------------------------------------------------------------------------

/// Reconstruct the history of one ordered batch.
///
/// The cancel flag is checked before every event. A cancelled run returns
/// the entries committed so far; events still held by the reorder queue are
/// dropped with it.
pub fn build<I>(
    events: I,
    config: &StarlogConfig,
    sink: &mut dyn HistorySink,
    log: &mut dyn EventLog,
    cancel: &CancelFlag,
) -> Reconstruction
where
    I: IntoIterator<Item = Event>,
{
    info!(
        reorder = config.reorder.enabled,
        sequence_expiry = config.reorder.sequence_expiry,
        discard = config.filter.discard_events.len(),
        "History reconstruction starting"
    );

    let mut builder = HistoryBuilder::new(config);
    for event in events {
        if cancel.is_cancelled() {
            info!(
                raw = builder.stats.raw,
                emitted = builder.stats.emitted,
                pending = builder.pending(),
                "History reconstruction cancelled"
            );
            return Reconstruction {
                stats: builder.stats,
                timeline: builder.timeline,
                cancelled: true,
            };
        }
        builder.ingest(event, sink, log);
    }

    let (timeline, stats) = builder.finish_with_stats(sink);
    info!(
        raw = stats.raw,
        emitted = stats.emitted,
        discarded = stats.discarded,
        repaired = stats.repaired,
        failed = stats.failed,
        unindexed = stats.unindexed,
        "History reconstruction finished"
    );
    Reconstruction {
        timeline,
        stats,
        cancelled: false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use starlog_types::{FsdJump, LoadGame, ScanDetails};

    use super::*;
    use crate::collaborators::{NoOpSink, ReadOnlyLog};

    fn ev(id: u64, secs: i64, kind: EventKind) -> Event {
        let t = DateTime::<Utc>::default()
            .checked_add_signed(TimeDelta::seconds(secs))
            .unwrap_or_default();
        Event::new(EventId::new(id), t, kind)
    }

    fn jump_to(id: u64, secs: i64, system: &str) -> Event {
        ev(
            id,
            secs,
            EventKind::FsdJump(FsdJump {
                star_system: system.to_owned(),
                ..FsdJump::default()
            }),
        )
    }

    #[test]
    fn discarded_events_never_reach_the_timeline() {
        let mut builder = HistoryBuilder::new(&StarlogConfig::default());
        builder.ingest(ev(1, 0, EventKind::Music), &mut NoOpSink, &mut ReadOnlyLog);
        builder.ingest(
            ev(2, 1, EventKind::LoadGame(LoadGame::default())),
            &mut NoOpSink,
            &mut ReadOnlyLog,
        );
        assert_eq!(builder.stats().discarded, 1);
        assert_eq!(builder.timeline().len(), 1);
    }

    #[test]
    fn corrupt_jump_is_skipped() {
        let mut builder = HistoryBuilder::new(&StarlogConfig::default());
        builder.ingest(jump_to(1, 0, "Training"), &mut NoOpSink, &mut ReadOnlyLog);
        builder.ingest(jump_to(2, 10, "Sol"), &mut NoOpSink, &mut ReadOnlyLog);
        let stats = builder.stats();
        let timeline = builder.finish(&mut NoOpSink);
        assert_eq!(stats.repaired, 1);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last().and_then(|e| e.travel.system_name()), Some("Sol"));
    }

    #[test]
    fn arrival_rules() {
        let jump = jump_to(1, 0, "Sol");
        let in_sol = starlog_travel::update(None, &jump);
        assert!(arrived(None, &in_sol, &jump));

        let other = ev(2, 1, EventKind::Unknown);
        let still = starlog_travel::update(Some(&in_sol), &other);
        assert!(!arrived(Some(&in_sol), &still, &other));
        assert!(!arrived(None, &TravelState::default(), &other));
    }

    #[test]
    fn name_requests_skip_blank_identifiers() {
        let scan = ev(
            1,
            0,
            EventKind::Scan(ScanDetails {
                body_name: "Sol 3".to_owned(),
                ..ScanDetails::default()
            }),
        );
        assert_eq!(name_request(&scan), Some((NameKind::Body, "Sol 3")));
        let blank = ev(2, 0, EventKind::LoadGame(LoadGame::default()));
        assert_eq!(name_request(&blank), None);
        assert_eq!(name_request(&ev(3, 0, EventKind::Died)), None);
    }

    #[test]
    fn cancelled_build_is_partial() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let result = build(
            vec![jump_to(1, 0, "Sol")],
            &StarlogConfig::default(),
            &mut NoOpSink,
            &mut ReadOnlyLog,
            &cancel,
        );
        assert!(result.cancelled);
        assert!(result.timeline.is_empty());
    }
}
