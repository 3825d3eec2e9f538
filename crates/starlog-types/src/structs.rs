//! Domain values carried from events into derived travel state.
//!
//! These are plain values copied out of event payloads. A travel state
//! holds them by value, so a snapshot never points back into the timeline
//! that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{BookingKind, GameMode, StationType};

/// A star system the player has been in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// System name as reported by the game.
    pub name: String,
    /// Game-assigned 64-bit system address, when reported.
    pub address: Option<u64>,
    /// Galactic coordinates in light years, when reported.
    pub position: Option<[f64; 3]>,
}

impl StarSystem {
    /// A system known only by name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            address: None,
            position: None,
        }
    }

    /// Whether two references describe the same system.
    ///
    /// Addresses win when both sides have one; otherwise names are compared
    /// case-insensitively.
    pub fn same_system(&self, other: &Self) -> bool {
        match (self.address, other.address) {
            (Some(a), Some(b)) => a == b,
            _ => self.name.eq_ignore_ascii_case(&other.name),
        }
    }
}

/// A station or port the player is docked at or standing in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRef {
    /// Station name.
    pub name: String,
    /// Station type.
    pub station_type: StationType,
    /// Market identifier, when reported.
    pub market_id: Option<u64>,
}

/// Where the player currently is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    /// The star system.
    pub system: StarSystem,
    /// Nearest or current body, when known.
    pub body: Option<String>,
    /// Body identifier within the system, when known.
    pub body_id: Option<u32>,
    /// Body category ("Planet", "Star", "Station", ...), when known.
    pub body_type: Option<String>,
    /// Station the player is at, when docked or walking in one.
    pub station: Option<StationRef>,
}

impl LocationRef {
    /// A location consisting only of a system.
    pub const fn in_system(system: StarSystem) -> Self {
        Self {
            system,
            body: None,
            body_id: None,
            body_type: None,
            station: None,
        }
    }
}

/// The ship the player owns and is currently using.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRef {
    /// Internal ship model name (for example `"python"`).
    pub ship_type: String,
    /// Per-commander ship identifier.
    pub ship_id: Option<u64>,
    /// Player-given ship name.
    pub name: Option<String>,
    /// Player-given ship ident.
    pub ident: Option<String>,
}

/// The most recent docking permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockingGrant {
    /// Station that granted docking.
    pub station_name: String,
    /// Assigned landing pad.
    pub landing_pad: u32,
    /// Market identifier of the station, when reported.
    pub market_id: Option<u64>,
    /// When the permission was granted.
    pub granted_at: DateTime<Utc>,
}

/// The most recent hyperspace charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpStart {
    /// Destination system, when reported.
    pub destination: Option<String>,
    /// Spectral class of the destination star, when reported.
    pub star_class: Option<String>,
    /// When the charge began.
    pub started_at: DateTime<Utc>,
}

/// The most recent passenger booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Taxi or drop ship.
    pub kind: BookingKind,
    /// Destination system, when reported.
    pub destination_system: Option<String>,
    /// Destination station or body, when reported.
    pub destination_location: Option<String>,
    /// When the booking was made.
    pub booked_at: DateTime<Utc>,
}

/// The most recent game session load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Commander name.
    pub commander: String,
    /// Game mode the session was loaded in.
    pub game_mode: GameMode,
    /// Private group name, when playing in a group.
    pub group: Option<String>,
    /// When the session was loaded.
    pub loaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_decide_system_identity() {
        let a = StarSystem {
            name: "Sol".to_owned(),
            address: Some(10_477_373_803),
            position: None,
        };
        let renamed = StarSystem {
            name: "SOL".to_owned(),
            address: Some(10_477_373_803),
            position: Some([0.0, 0.0, 0.0]),
        };
        let other = StarSystem {
            name: "Sol".to_owned(),
            address: Some(1),
            position: None,
        };
        assert!(a.same_system(&renamed));
        assert!(!a.same_system(&other));
    }

    #[test]
    fn names_decide_when_address_missing() {
        assert!(StarSystem::named("Shinrarta Dezhra").same_system(&StarSystem::named("shinrarta dezhra")));
        assert!(!StarSystem::named("Sol").same_system(&StarSystem::named("Achenar")));
    }
}
