//! The reorder/merge queue.
//!
//! [`ReorderQueue::push`] takes one raw event and returns the events that
//! are ready for emission now: zero (buffered or suppressed), one, or
//! several (a flushed or reordered sequence). The queue holds at most one
//! open sequence at a time.
//!
//! While a sequence is open, unrelated events are held behind it rather
//! than emitted, so emission order follows arrival order. The one
//! deliberate exception is the destination drop, which is emitted after the
//! supercruise exit that closes it.

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use starlog_types::{Event, EventType};

use crate::snapshot::SnapshotHistory;
use crate::table::{step, CloseMode, SequenceKind, Step};

/// Parameters for a [`ReorderQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueParams {
    /// When false every event passes through unchanged.
    pub enabled: bool,
    /// Events strictly before this instant pass through unchanged.
    pub cutoff: DateTime<Utc>,
    /// Unrelated events tolerated before an open sequence is flushed
    /// unmerged.
    pub sequence_expiry: u32,
    /// Emitted events remembered for listing suppression.
    pub lookback_limit: usize,
}

/// The first day the game wrote on-foot sequences in their current shape.
pub fn default_cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 19, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl Default for QueueParams {
    fn default() -> Self {
        Self {
            enabled: true,
            cutoff: default_cutoff(),
            sequence_expiry: 10,
            lookback_limit: 256,
        }
    }
}

/// An event buffered after the starter.
#[derive(Debug, Clone)]
struct Slot {
    event: Event,
    /// Part of the sequence, as opposed to an unrelated event held back.
    member: bool,
}

/// The sequence currently being collected.
#[derive(Debug, Clone)]
struct OpenSequence {
    kind: SequenceKind,
    starter: Event,
    /// Everything after the starter, in arrival order.
    slots: Vec<Slot>,
    /// Unrelated events seen since the sequence opened.
    age: u32,
    saw_backpack: bool,
}

impl OpenSequence {
    const fn start(kind: SequenceKind, starter: Event) -> Self {
        Self {
            kind,
            starter,
            slots: Vec::new(),
            age: 0,
            saw_backpack: false,
        }
    }

    fn len(&self) -> usize {
        self.slots.len().saturating_add(1)
    }

    fn absorb(&mut self, event: Event) {
        if event.event_type() == EventType::Backpack {
            self.saw_backpack = true;
        }
        self.slots.push(Slot {
            event,
            member: true,
        });
    }

    fn hold(&mut self, event: Event) {
        self.age = self.age.saturating_add(1);
        self.slots.push(Slot {
            event,
            member: false,
        });
    }

    /// Emit the collected events one by one, in arrival order.
    fn into_unmerged(self) -> Vec<Event> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.starter);
        out.extend(self.slots.into_iter().map(|slot| slot.event));
        out
    }

    /// Emit the sequence closed by `terminator`.
    fn close(self, terminator: Event) -> Vec<Event> {
        match self.kind.close_mode() {
            CloseMode::Merge => {
                let (members, held): (Vec<Slot>, Vec<Slot>) =
                    self.slots.into_iter().partition(|slot| slot.member);
                let mut followers: Vec<Event> = members.into_iter().map(|slot| slot.event).collect();
                followers.push(terminator);
                let mut out = Vec::with_capacity(held.len().saturating_add(1));
                out.push(self.starter.absorbing(followers));
                out.extend(held.into_iter().map(|slot| slot.event));
                out
            }
            CloseMode::Reorder => {
                let mut out = Vec::with_capacity(self.slots.len().saturating_add(2));
                out.extend(self.slots.into_iter().map(|slot| slot.event));
                out.push(terminator);
                out.push(self.starter);
                out
            }
        }
    }
}

/// Lookahead buffer that collapses known multi-event sequences and drops
/// redundant listing snapshots.
#[derive(Debug, Clone)]
pub struct ReorderQueue {
    params: QueueParams,
    open: Option<OpenSequence>,
    history: SnapshotHistory,
}

impl Default for ReorderQueue {
    fn default() -> Self {
        Self::new(QueueParams::default())
    }
}

impl ReorderQueue {
    /// Create an empty queue.
    pub fn new(params: QueueParams) -> Self {
        let history = SnapshotHistory::new(params.lookback_limit);
        Self {
            params,
            open: None,
            history,
        }
    }

    /// Whether a sequence is currently buffered.
    pub const fn is_pending(&self) -> bool {
        self.open.is_some()
    }

    /// Number of buffered events.
    pub fn pending_len(&self) -> usize {
        self.open.as_ref().map_or(0, OpenSequence::len)
    }

    /// Accept one raw event and return the events ready for emission.
    pub fn push(&mut self, event: Event) -> Vec<Event> {
        let emitted = self.route(event);
        for e in &emitted {
            self.history.record(e);
        }
        emitted
    }

    /// Emit whatever is still buffered, unmerged. Call at the end of a
    /// batch so no raw event is lost.
    pub fn flush(&mut self) -> Vec<Event> {
        let emitted = self.take_unmerged();
        for e in &emitted {
            self.history.record(e);
        }
        emitted
    }

    fn route(&mut self, event: Event) -> Vec<Event> {
        if !self.params.enabled || event.timestamp < self.params.cutoff {
            let mut out = self.take_unmerged();
            out.push(event);
            return out;
        }

        if self.history.is_redundant(&event) {
            debug!(id = %event.id, event_type = %event.event_type(), "suppressed repeated listing");
            return Vec::new();
        }

        let incoming = event.event_type();
        let Some(open) = self.open.as_mut() else {
            return match SequenceKind::started_by(incoming) {
                Some(kind) => {
                    self.open = Some(OpenSequence::start(kind, event));
                    Vec::new()
                }
                None => vec![event],
            };
        };

        match step(open.kind, open.saw_backpack, incoming) {
            Step::Absorb => {
                open.absorb(event);
                Vec::new()
            }
            Step::Close => match self.open.take() {
                Some(sequence) => {
                    debug!(
                        sequence = ?sequence.kind,
                        events = sequence.len().saturating_add(1),
                        "closed sequence"
                    );
                    sequence.close(event)
                }
                None => vec![event],
            },
            Step::Restart(kind) => {
                let out = self.take_unmerged();
                self.open = Some(OpenSequence::start(kind, event));
                out
            }
            Step::Flush => {
                let mut out = self.take_unmerged();
                out.push(event);
                out
            }
            Step::Pass => {
                open.hold(event);
                if open.age >= self.params.sequence_expiry {
                    debug!(sequence = ?open.kind, age = open.age, "sequence expired");
                    self.take_unmerged()
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn take_unmerged(&mut self) -> Vec<Event> {
        self.open
            .take()
            .map(OpenSequence::into_unmerged)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use starlog_types::{
        DestinationDrop, Docked, EventId, EventKind, Inventory, ItemDetails, Listing, ShipDetails,
        SuitDetails, SupercruiseExit, Transfer, Undocked,
    };

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 3, 1, 10, 0, 0)
            .single()
            .unwrap_or_default()
            .checked_add_signed(chrono::TimeDelta::seconds(secs))
            .unwrap_or_default()
    }

    fn ev(id: u64, secs: i64, kind: EventKind) -> Event {
        Event::new(EventId::new(id), at(secs), kind)
    }

    fn types(events: &[Event]) -> Vec<EventType> {
        events.iter().map(Event::event_type).collect()
    }

    fn outfitting(id: u64, secs: i64) -> Event {
        ev(
            id,
            secs,
            EventKind::Outfitting(Listing {
                items: vec![serde_json::json!({"Name": "int_hyperdrive_size5_class5"})],
                ..Listing::default()
            }),
        )
    }

    #[test]
    fn disembark_round_trip_collapses_to_one_entry() {
        let mut queue = ReorderQueue::default();
        let raw = vec![
            ev(1, 0, EventKind::Disembark(Transfer::default())),
            ev(2, 1, EventKind::ShipLocker(Inventory::default())),
            ev(3, 1, EventKind::SuitLoadout(SuitDetails::default())),
            ev(4, 2, EventKind::Backpack(Inventory::default())),
            ev(5, 2, EventKind::ShipLocker(Inventory::default())),
        ];
        let mut emitted = Vec::new();
        for event in raw {
            emitted.extend(queue.push(event));
        }
        emitted.extend(queue.flush());

        assert_eq!(emitted.len(), 1);
        let merged = emitted.first();
        assert_eq!(merged.map(Event::event_type), Some(EventType::Disembark));
        assert_eq!(merged.map(|e| e.timestamp), Some(at(0)));
        assert_eq!(merged.map(|e| e.id), Some(EventId::new(1)));
        assert_eq!(merged.map(|e| e.absorbed.len()), Some(4));
        assert!(!queue.is_pending());
    }

    #[test]
    fn repeated_outfitting_is_suppressed() {
        let mut queue = ReorderQueue::default();
        assert_eq!(queue.push(outfitting(1, 0)).len(), 1);
        assert!(queue.push(outfitting(2, 5)).is_empty());

        queue.push(ev(3, 10, EventKind::Docked(Docked::default())));
        assert_eq!(queue.push(outfitting(4, 15)).len(), 1);
    }

    #[test]
    fn sequence_expires_after_unrelated_events() {
        let mut queue = ReorderQueue::default();
        assert!(queue
            .push(ev(1, 0, EventKind::Disembark(Transfer::default())))
            .is_empty());
        for i in 1_u64..10 {
            let out = queue.push(ev(i.saturating_add(1), 1, EventKind::Music));
            assert!(out.is_empty(), "event {i}");
            assert!(queue.is_pending());
        }
        let out = queue.push(ev(11, 2, EventKind::Music));
        assert_eq!(out.len(), 11);
        assert_eq!(out.first().map(Event::event_type), Some(EventType::Disembark));
        assert!(out.iter().skip(1).all(|e| e.event_type() == EventType::Music));
        let ids: Vec<u64> = out.iter().map(|e| e.id.into_inner()).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<u64>>());
        assert!(!queue.is_pending());
    }

    #[test]
    fn unrelated_events_wait_behind_open_sequence() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(1, 20, EventKind::Embark(Transfer::default())));
        queue.push(ev(2, 21, EventKind::Loadout(ShipDetails::default())));
        assert!(queue
            .push(ev(3, 60, EventKind::Undocked(Undocked::default())))
            .is_empty());
        assert_eq!(queue.pending_len(), 3);

        let out = queue.push(ev(4, 61, EventKind::Died));
        assert_eq!(
            types(&out),
            vec![
                EventType::Embark,
                EventType::Loadout,
                EventType::Undocked,
                EventType::Died
            ]
        );
        assert!(out
            .windows(2)
            .all(|w| w.first().map(|e| e.timestamp) <= w.last().map(|e| e.timestamp)));
    }

    #[test]
    fn held_events_follow_the_merged_starter() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(1, 0, EventKind::Disembark(Transfer::default())));
        queue.push(ev(2, 1, EventKind::Backpack(Inventory::default())));
        queue.push(ev(3, 2, EventKind::Undocked(Undocked::default())));
        let out = queue.push(ev(4, 3, EventKind::ShipLocker(Inventory::default())));

        assert_eq!(types(&out), vec![EventType::Disembark, EventType::Undocked]);
        let absorbed: Vec<EventId> = out
            .first()
            .map(|e| e.absorbed.iter().map(|a| a.id).collect())
            .unwrap_or_default();
        assert_eq!(absorbed, vec![EventId::new(2), EventId::new(4)]);
    }

    #[test]
    fn destination_drop_moves_only_itself_after_exit() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(
            1,
            0,
            EventKind::SupercruiseDestinationDrop(DestinationDrop::default()),
        ));
        assert!(queue.push(ev(2, 0, EventKind::Music)).is_empty());
        let out = queue.push(ev(
            3,
            1,
            EventKind::SupercruiseExit(SupercruiseExit::default()),
        ));
        assert_eq!(
            types(&out),
            vec![
                EventType::Music,
                EventType::SupercruiseExit,
                EventType::SupercruiseDestinationDrop
            ]
        );
    }

    #[test]
    fn destination_drop_is_emitted_after_exit() {
        let mut queue = ReorderQueue::default();
        assert!(queue
            .push(ev(
                1,
                0,
                EventKind::SupercruiseDestinationDrop(DestinationDrop::default())
            ))
            .is_empty());
        let out = queue.push(ev(
            2,
            0,
            EventKind::SupercruiseExit(SupercruiseExit::default()),
        ));
        assert_eq!(
            types(&out),
            vec![
                EventType::SupercruiseExit,
                EventType::SupercruiseDestinationDrop
            ]
        );
    }

    #[test]
    fn events_before_cutoff_pass_through() {
        let mut queue = ReorderQueue::default();
        let old = Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();
        let disembark = Event::new(
            EventId::new(1),
            old,
            EventKind::Disembark(Transfer::default()),
        );
        let locker = Event::new(
            EventId::new(2),
            old,
            EventKind::ShipLocker(Inventory::default()),
        );
        assert_eq!(queue.push(disembark).len(), 1);
        assert_eq!(queue.push(locker).len(), 1);
        assert!(!queue.is_pending());
    }

    #[test]
    fn disabled_queue_passes_everything() {
        let mut queue = ReorderQueue::new(QueueParams {
            enabled: false,
            ..QueueParams::default()
        });
        assert_eq!(
            queue
                .push(ev(1, 0, EventKind::Disembark(Transfer::default())))
                .len(),
            1
        );
        assert_eq!(queue.push(outfitting(2, 1)).len(), 1);
        assert_eq!(queue.push(outfitting(3, 2)).len(), 1);
    }

    #[test]
    fn flush_emits_unmerged_buffer() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(1, 0, EventKind::Embark(Transfer::default())));
        queue.push(ev(2, 1, EventKind::SuitLoadout(SuitDetails::default())));
        assert_eq!(queue.pending_len(), 2);
        let out = queue.flush();
        assert_eq!(types(&out), vec![EventType::Embark, EventType::SuitLoadout]);
        assert!(queue.flush().is_empty());
    }

    #[test]
    fn session_boundary_flushes_before_itself() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(1, 0, EventKind::Disembark(Transfer::default())));
        let out = queue.push(ev(2, 1, EventKind::Shutdown));
        assert_eq!(types(&out), vec![EventType::Disembark, EventType::Shutdown]);
    }

    #[test]
    fn new_starter_flushes_previous_sequence() {
        let mut queue = ReorderQueue::default();
        queue.push(ev(
            1,
            0,
            EventKind::CollectItems(ItemDetails::default()),
        ));
        let out = queue.push(ev(2, 1, EventKind::Disembark(Transfer::default())));
        assert_eq!(types(&out), vec![EventType::CollectItems]);
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn terminator_without_sequence_passes() {
        let mut queue = ReorderQueue::default();
        let out = queue.push(ev(1, 0, EventKind::ShipLocker(Inventory::default())));
        assert_eq!(types(&out), vec![EventType::ShipLocker]);
    }
}
