//! The per-entry travel snapshot.
//!
//! A [`TravelState`] is produced by applying one event to the previous
//! snapshot (see [`crate::update`]). Snapshots are plain values: they own
//! copies of the domain references they carry and are never mutated once
//! stored in a timeline entry.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use starlog_types::{
    Booking, BookingKind, DockingGrant, GameSession, JumpStart, LocationRef, ShipRef, TravelMode,
};

/// Player state derived from the event stream up to one timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelState {
    /// Current activity.
    pub mode: TravelMode,
    /// Current location, once any location-bearing event has been seen.
    pub location: Option<LocationRef>,
    /// The player's own ship.
    pub ship: Option<ShipRef>,
    /// The most recent game-session load.
    pub session: Option<GameSession>,
    /// The most recent docking permission not yet consumed.
    pub docking_grant: Option<DockingGrant>,
    /// The most recent hyperspace charge not yet completed.
    pub jump_start: Option<JumpStart>,
    /// The most recent passenger booking not yet completed or cancelled.
    pub booking: Option<Booking>,
    /// The body most recently approached.
    pub approach_body: Option<String>,
    /// Whether the player is wanted in the current jurisdiction.
    pub wanted: bool,
    /// Captain of the crew the player has joined.
    pub crew_captain: Option<String>,
    /// Jump range multiplier for the next hyperspace jump.
    pub boost: Decimal,
}

impl Default for TravelState {
    fn default() -> Self {
        Self {
            mode: TravelMode::Unknown,
            location: None,
            ship: None,
            session: None,
            docking_grant: None,
            jump_start: None,
            booking: None,
            approach_body: None,
            wanted: false,
            crew_captain: None,
            boost: Decimal::ONE,
        }
    }
}

impl TravelState {
    /// Name of the current star system, if known.
    pub fn system_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .map(|l| l.system.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Name of the station the player is at, if any.
    pub fn station_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.station.as_ref())
            .map(|s| s.name.as_str())
    }

    /// Whether the passenger transport in use is a drop ship.
    ///
    /// Location-kind events only say "taxi"; the booking (or the current
    /// mode) tells a drop ship apart from an Apex taxi.
    pub fn is_dropship_passenger(&self) -> bool {
        self.mode.is_dropship()
            || self
                .booking
                .as_ref()
                .is_some_and(|b| b.kind == BookingKind::DropShip)
    }

    /// Whether a hyperspace charge has gone unanswered for longer than
    /// `grace` at wall-clock time `now`.
    ///
    /// Computed lazily against the supplied `now`; the snapshot itself
    /// holds no clock.
    pub fn jump_overdue(&self, now: DateTime<Utc>, grace: TimeDelta) -> bool {
        self.jump_start
            .as_ref()
            .is_some_and(|j| now.signed_duration_since(j.started_at) > grace)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_650_000_000_i64.saturating_add(secs), 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn default_state_is_unknown_with_unit_boost() {
        let state = TravelState::default();
        assert_eq!(state.mode, TravelMode::Unknown);
        assert_eq!(state.boost, Decimal::ONE);
        assert!(state.system_name().is_none());
    }

    #[test]
    fn jump_overdue_only_after_grace() {
        let state = TravelState {
            jump_start: Some(JumpStart {
                destination: Some("Sol".to_owned()),
                star_class: None,
                started_at: at(0),
            }),
            ..TravelState::default()
        };
        let grace = TimeDelta::seconds(60);
        assert!(!state.jump_overdue(at(30), grace));
        assert!(!state.jump_overdue(at(60), grace));
        assert!(state.jump_overdue(at(61), grace));
        assert!(!TravelState::default().jump_overdue(at(1_000), grace));
    }

    #[test]
    fn dropship_booking_marks_passenger() {
        let state = TravelState {
            booking: Some(Booking {
                kind: BookingKind::DropShip,
                destination_system: None,
                destination_location: None,
                booked_at: at(0),
            }),
            ..TravelState::default()
        };
        assert!(state.is_dropship_passenger());
        assert!(!TravelState::default().is_dropship_passenger());
    }
}
