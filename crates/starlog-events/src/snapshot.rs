//! Suppression of redundant listing snapshots.
//!
//! The game rewrites the outfitting, market and shipyard listings every time
//! the corresponding screen is opened. Once a station's listing has been
//! seen with data, repeats before the next dock, load or shutdown carry no
//! new information.

use std::collections::VecDeque;

use starlog_types::{Event, EventType};

/// One emitted event as remembered for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seen {
    event_type: EventType,
    had_data: bool,
}

/// Bounded memory of recently emitted event types.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    recent: VecDeque<Seen>,
    limit: usize,
}

/// Whether an event type is a listing snapshot subject to suppression.
pub const fn is_listing(event_type: EventType) -> bool {
    matches!(
        event_type,
        EventType::Outfitting | EventType::Market | EventType::Shipyard
    )
}

/// Whether an event type resets listing suppression.
const fn is_listing_boundary(event_type: EventType) -> bool {
    matches!(
        event_type,
        EventType::Docked | EventType::LoadGame | EventType::Shutdown
    )
}

impl SnapshotHistory {
    /// Create a history that remembers at most `limit` emitted events.
    pub fn new(limit: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    /// Remember an emitted event, evicting the oldest beyond the limit.
    pub fn record(&mut self, event: &Event) {
        if self.limit == 0 {
            return;
        }
        while self.recent.len() >= self.limit {
            self.recent.pop_front();
        }
        self.recent.push_back(Seen {
            event_type: event.event_type(),
            had_data: event.listing_len().is_some_and(|n| n > 0),
        });
    }

    /// Whether `event` repeats a listing already seen with data since the
    /// most recent boundary.
    pub fn is_redundant(&self, event: &Event) -> bool {
        let event_type = event.event_type();
        if !is_listing(event_type) {
            return false;
        }
        for seen in self.recent.iter().rev() {
            if is_listing_boundary(seen.event_type) {
                return false;
            }
            if seen.event_type == event_type && seen.had_data {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use starlog_types::{Docked, EventId, EventKind, Listing};

    use super::*;

    fn listing(kind: fn(Listing) -> EventKind, rows: usize) -> Event {
        let t = "2022-03-01T10:00:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap_or_default();
        Event::new(
            EventId::new(1),
            t,
            kind(Listing {
                items: vec![serde_json::json!({"id": 1}); rows],
                ..Listing::default()
            }),
        )
    }

    fn plain(kind: EventKind) -> Event {
        let t = "2022-03-01T10:00:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap_or_default();
        Event::new(EventId::new(1), t, kind)
    }

    #[test]
    fn repeat_with_data_is_redundant() {
        let mut history = SnapshotHistory::new(16);
        let first = listing(EventKind::Outfitting, 3);
        assert!(!history.is_redundant(&first));
        history.record(&first);
        assert!(history.is_redundant(&listing(EventKind::Outfitting, 3)));
        assert!(!history.is_redundant(&listing(EventKind::Market, 3)));
    }

    #[test]
    fn empty_listing_does_not_suppress() {
        let mut history = SnapshotHistory::new(16);
        history.record(&listing(EventKind::Market, 0));
        assert!(!history.is_redundant(&listing(EventKind::Market, 5)));
    }

    #[test]
    fn boundary_resets_suppression() {
        let mut history = SnapshotHistory::new(16);
        history.record(&listing(EventKind::Shipyard, 2));
        history.record(&plain(EventKind::Docked(Docked::default())));
        assert!(!history.is_redundant(&listing(EventKind::Shipyard, 2)));
    }

    #[test]
    fn lookback_is_bounded() {
        let mut history = SnapshotHistory::new(3);
        history.record(&listing(EventKind::Outfitting, 1));
        for _ in 0..3 {
            history.record(&plain(EventKind::Music));
        }
        assert_eq!(history.recent.len(), 3);
        assert!(!history.is_redundant(&listing(EventKind::Outfitting, 1)));
    }
}
