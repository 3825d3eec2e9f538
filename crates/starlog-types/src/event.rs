//! The immutable event record and its kind-specific payloads.
//!
//! An [`Event`] is one timestamped record from a session log. Its
//! [`EventKind`] is a closed sum type: every kind the engine reasons about
//! has a variant, and everything else deserializes as
//! [`EventKind::Unknown`]. Payload structs default every field, so a record
//! with missing or malformed optional fields still yields a usable event.
//!
//! Records deserialize directly from the session-log JSON shape:
//!
//! ```
//! use starlog_types::{Event, EventType};
//!
//! let line = r#"{"timestamp":"2022-03-01T10:00:00Z","event":"FSDJump","StarSystem":"Sol","JumpDist":12.3}"#;
//! let event: Event = serde_json::from_str(line).unwrap_or_else(|_| unreachable!());
//! assert_eq!(event.event_type(), EventType::FsdJump);
//! assert_eq!(event.star_system(), Some("Sol"));
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{EventType, GameMode, JumpType, StationType, VehicleTarget};
use crate::ids::EventId;

// ---------------------------------------------------------------------------
// Event record
// ---------------------------------------------------------------------------

/// One timestamped record from a session log.
///
/// Events are never mutated once created. Collapsing a multi-event sequence
/// produces a new event that owns the absorbed records in
/// [`Event::absorbed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the log store.
    #[serde(default)]
    pub id: EventId,
    /// When the event happened (UTC).
    pub timestamp: DateTime<Utc>,
    /// Kind tag and kind-specific payload.
    #[serde(flatten)]
    pub kind: EventKind,
    /// Records collapsed into this one, in arrival order.
    #[serde(skip)]
    pub absorbed: Vec<Event>,
}

impl Event {
    /// Create an event with no absorbed records.
    pub const fn new(id: EventId, timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self {
            id,
            timestamp,
            kind,
            absorbed: Vec::new(),
        }
    }

    /// The fieldless type tag of this event.
    pub const fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Return a copy of this event that owns `followers` as absorbed
    /// records. The identity and timestamp stay those of `self`.
    #[must_use]
    pub fn absorbing(mut self, followers: Vec<Self>) -> Self {
        self.absorbed.extend(followers);
        self
    }

    /// The most recent absorbed record of the given type, if any.
    pub fn absorbed_of(&self, event_type: EventType) -> Option<&Self> {
        self.absorbed
            .iter()
            .rev()
            .find(|e| e.event_type() == event_type)
    }

    /// Name of the star system the event reports, for kinds that carry one.
    pub fn star_system(&self) -> Option<&str> {
        let name = match &self.kind {
            EventKind::Location(d) | EventKind::CarrierJump(d) => d.star_system.as_str(),
            EventKind::FsdJump(d) => d.star_system.as_str(),
            EventKind::Docked(d) => d.star_system.as_str(),
            EventKind::SupercruiseEntry(d) => d.star_system.as_str(),
            EventKind::SupercruiseExit(d) => d.star_system.as_str(),
            EventKind::ApproachBody(d) | EventKind::LeaveBody(d) => d.star_system.as_str(),
            EventKind::Scan(d) | EventKind::SaaScanComplete(d) => d.star_system.as_str(),
            EventKind::FssDiscoveryScan(d) => d.system_name.as_str(),
            _ => "",
        };
        if name.is_empty() { None } else { Some(name) }
    }

    /// Number of entries in a listing snapshot (outfitting, market,
    /// shipyard). `None` for other kinds.
    pub fn listing_len(&self) -> Option<usize> {
        match &self.kind {
            EventKind::Outfitting(d) | EventKind::Market(d) | EventKind::Shipyard(d) => {
                Some(d.items.len())
            }
            _ => None,
        }
    }

    /// Distance reported by a hyperspace jump, if this is one.
    pub const fn jump_distance(&self) -> Option<Decimal> {
        match &self.kind {
            EventKind::FsdJump(d) => Some(d.jump_dist),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Event kinds
// ---------------------------------------------------------------------------

/// Kind tag plus kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum EventKind {
    /// Game session loaded.
    LoadGame(LoadGame),
    /// Game process shut down cleanly.
    Shutdown,
    /// Player died.
    Died,
    /// Player resurrected after death.
    Resurrect,
    /// Full location snapshot.
    Location(LocationDetails),
    /// Hyperspace jump completed.
    #[serde(rename = "FSDJump")]
    FsdJump(FsdJump),
    /// Fleet carrier jumped with the player aboard.
    CarrierJump(LocationDetails),
    /// Frame-shift drive charging.
    StartJump(StartJump),
    /// Entered supercruise.
    SupercruiseEntry(SupercruiseEntry),
    /// Dropped out of supercruise.
    SupercruiseExit(SupercruiseExit),
    /// Dropped out of supercruise at a selected destination.
    SupercruiseDestinationDrop(DestinationDrop),
    /// Docked at a station.
    Docked(Docked),
    /// Undocked from a station.
    Undocked(Undocked),
    /// Docking request granted.
    DockingGranted(DockingGranted),
    /// Docking request cancelled.
    DockingCancelled,
    /// Docking request timed out.
    DockingTimeout,
    /// Ship touched down on a surface.
    Touchdown(SurfaceContact),
    /// Ship lifted off from a surface.
    Liftoff(SurfaceContact),
    /// SRV deployed.
    #[serde(rename = "LaunchSRV")]
    LaunchSrv(VehicleLaunch),
    /// SRV recovered into the ship.
    #[serde(rename = "DockSRV")]
    DockSrv,
    /// SRV destroyed.
    #[serde(rename = "SRVDestroyed")]
    SrvDestroyed,
    /// Fighter launched.
    LaunchFighter(VehicleLaunch),
    /// Fighter recovered into the ship.
    DockFighter,
    /// Fighter destroyed.
    FighterDestroyed,
    /// Control switched between ship and fighter.
    VehicleSwitch(VehicleSwitch),
    /// Player boarded a vehicle.
    Embark(Transfer),
    /// Player left a vehicle on foot.
    Disembark(Transfer),
    /// Taxi booked.
    BookTaxi(BookingDetails),
    /// Taxi booking cancelled.
    CancelTaxi,
    /// Drop ship booked.
    BookDropship(BookingDetails),
    /// Drop ship booking cancelled.
    CancelDropship,
    /// Approached a planetary body.
    ApproachBody(BodyDetails),
    /// Left the vicinity of a planetary body.
    LeaveBody(BodyDetails),
    /// Joined another commander's crew.
    JoinACrew(CrewDetails),
    /// Left another commander's crew.
    QuitACrew(CrewDetails),
    /// Crew session ended by the captain.
    EndCrewSession,
    /// Full ship loadout.
    Loadout(ShipDetails),
    /// Switched to another stored ship.
    ShipyardSwap(ShipyardSwap),
    /// Neutron or white dwarf jet cone boost.
    JetConeBoost(JetConeBoost),
    /// Suit loadout snapshot.
    SuitLoadout(SuitDetails),
    /// Switched suit loadout.
    SwitchSuitLoadout(SuitDetails),
    /// Picked up on-foot items.
    CollectItems(ItemDetails),
    /// Dropped on-foot items.
    DropItems(ItemDetails),
    /// Used an on-foot consumable.
    UseConsumable(ItemDetails),
    /// Restocked suit energy and ammunition.
    Resupply,
    /// Bought microresources.
    BuyMicroResources,
    /// Sold microresources.
    SellMicroResources,
    /// Traded microresources.
    TradeMicroResources,
    /// Backpack contents changed.
    BackpackChange,
    /// Ship locker inventory snapshot.
    ShipLocker(Inventory),
    /// Backpack inventory snapshot.
    Backpack(Inventory),
    /// Outfitting listing snapshot.
    Outfitting(Listing),
    /// Commodity market listing snapshot.
    Market(Listing),
    /// Shipyard listing snapshot.
    Shipyard(Listing),
    /// Body scan.
    Scan(ScanDetails),
    /// Surface mapping completed.
    #[serde(rename = "SAAScanComplete")]
    SaaScanComplete(ScanDetails),
    /// Full-spectrum discovery honk.
    #[serde(rename = "FSSDiscoveryScan")]
    FssDiscoveryScan(DiscoveryScan),
    /// User-inserted marker opening a travel-accumulation episode.
    StartMarker,
    /// User-inserted marker closing a travel-accumulation episode.
    StopMarker,
    /// Soundtrack change.
    Music,
    /// Fuel reservoir topped up.
    ReservoirReplenished,
    /// An event kind the engine does not model.
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// The fieldless type tag of this kind.
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::LoadGame(_) => EventType::LoadGame,
            Self::Shutdown => EventType::Shutdown,
            Self::Died => EventType::Died,
            Self::Resurrect => EventType::Resurrect,
            Self::Location(_) => EventType::Location,
            Self::FsdJump(_) => EventType::FsdJump,
            Self::CarrierJump(_) => EventType::CarrierJump,
            Self::StartJump(_) => EventType::StartJump,
            Self::SupercruiseEntry(_) => EventType::SupercruiseEntry,
            Self::SupercruiseExit(_) => EventType::SupercruiseExit,
            Self::SupercruiseDestinationDrop(_) => EventType::SupercruiseDestinationDrop,
            Self::Docked(_) => EventType::Docked,
            Self::Undocked(_) => EventType::Undocked,
            Self::DockingGranted(_) => EventType::DockingGranted,
            Self::DockingCancelled => EventType::DockingCancelled,
            Self::DockingTimeout => EventType::DockingTimeout,
            Self::Touchdown(_) => EventType::Touchdown,
            Self::Liftoff(_) => EventType::Liftoff,
            Self::LaunchSrv(_) => EventType::LaunchSrv,
            Self::DockSrv => EventType::DockSrv,
            Self::SrvDestroyed => EventType::SrvDestroyed,
            Self::LaunchFighter(_) => EventType::LaunchFighter,
            Self::DockFighter => EventType::DockFighter,
            Self::FighterDestroyed => EventType::FighterDestroyed,
            Self::VehicleSwitch(_) => EventType::VehicleSwitch,
            Self::Embark(_) => EventType::Embark,
            Self::Disembark(_) => EventType::Disembark,
            Self::BookTaxi(_) => EventType::BookTaxi,
            Self::CancelTaxi => EventType::CancelTaxi,
            Self::BookDropship(_) => EventType::BookDropship,
            Self::CancelDropship => EventType::CancelDropship,
            Self::ApproachBody(_) => EventType::ApproachBody,
            Self::LeaveBody(_) => EventType::LeaveBody,
            Self::JoinACrew(_) => EventType::JoinACrew,
            Self::QuitACrew(_) => EventType::QuitACrew,
            Self::EndCrewSession => EventType::EndCrewSession,
            Self::Loadout(_) => EventType::Loadout,
            Self::ShipyardSwap(_) => EventType::ShipyardSwap,
            Self::JetConeBoost(_) => EventType::JetConeBoost,
            Self::SuitLoadout(_) => EventType::SuitLoadout,
            Self::SwitchSuitLoadout(_) => EventType::SwitchSuitLoadout,
            Self::CollectItems(_) => EventType::CollectItems,
            Self::DropItems(_) => EventType::DropItems,
            Self::UseConsumable(_) => EventType::UseConsumable,
            Self::Resupply => EventType::Resupply,
            Self::BuyMicroResources => EventType::BuyMicroResources,
            Self::SellMicroResources => EventType::SellMicroResources,
            Self::TradeMicroResources => EventType::TradeMicroResources,
            Self::BackpackChange => EventType::BackpackChange,
            Self::ShipLocker(_) => EventType::ShipLocker,
            Self::Backpack(_) => EventType::Backpack,
            Self::Outfitting(_) => EventType::Outfitting,
            Self::Market(_) => EventType::Market,
            Self::Shipyard(_) => EventType::Shipyard,
            Self::Scan(_) => EventType::Scan,
            Self::SaaScanComplete(_) => EventType::SaaScanComplete,
            Self::FssDiscoveryScan(_) => EventType::FssDiscoveryScan,
            Self::StartMarker => EventType::StartMarker,
            Self::StopMarker => EventType::StopMarker,
            Self::Music => EventType::Music,
            Self::ReservoirReplenished => EventType::ReservoirReplenished,
            Self::Unknown => EventType::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Payload of a game-session load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoadGame {
    /// Commander name.
    pub commander: String,
    /// Internal ship model name.
    pub ship: String,
    /// Per-commander ship identifier.
    #[serde(rename = "ShipID")]
    pub ship_id: Option<u64>,
    /// Player-given ship name.
    pub ship_name: Option<String>,
    /// Player-given ship ident.
    pub ship_ident: Option<String>,
    /// Game mode.
    pub game_mode: GameMode,
    /// Private group name.
    pub group: Option<String>,
    /// Whether the session started on a planetary surface.
    pub start_landed: bool,
    /// Whether the session started dead.
    pub start_dead: bool,
}

/// Payload shared by full location snapshots and carrier jumps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LocationDetails {
    /// System name.
    pub star_system: String,
    /// System address.
    pub system_address: Option<u64>,
    /// Galactic coordinates.
    pub star_pos: Option<[f64; 3]>,
    /// Whether the player is docked.
    pub docked: bool,
    /// Station name, when at one.
    pub station_name: Option<String>,
    /// Station type, when at one.
    pub station_type: StationType,
    /// Station market identifier.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
    /// Nearest body.
    pub body: Option<String>,
    /// Nearest body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
    /// Nearest body category.
    pub body_type: Option<String>,
    /// Whether the player is on foot.
    pub on_foot: bool,
    /// Whether the player is in an SRV.
    #[serde(rename = "InSRV")]
    pub in_srv: bool,
    /// Whether the player is a taxi or drop-ship passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
    /// Surface latitude, present when landed.
    pub latitude: Option<f64>,
    /// Surface longitude, present when landed.
    pub longitude: Option<f64>,
    /// Whether the player is wanted in this system.
    pub wanted: bool,
}

impl LocationDetails {
    /// Whether the snapshot carries surface coordinates.
    pub const fn has_surface_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Payload of a completed hyperspace jump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FsdJump {
    /// Destination system name.
    pub star_system: String,
    /// Destination system address.
    pub system_address: Option<u64>,
    /// Destination coordinates.
    pub star_pos: Option<[f64; 3]>,
    /// Arrival body (usually the main star).
    pub body: Option<String>,
    /// Arrival body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
    /// Arrival body category.
    pub body_type: Option<String>,
    /// Jump distance in light years. Zero or negative when not reported.
    pub jump_dist: Decimal,
    /// Whether the player is a taxi or drop-ship passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
    /// Whether the player is wanted in the destination system.
    pub wanted: bool,
}

/// Payload of a frame-shift charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartJump {
    /// Hyperspace or supercruise.
    pub jump_type: JumpType,
    /// Destination system, for hyperspace charges.
    pub star_system: Option<String>,
    /// Destination star class, for hyperspace charges.
    pub star_class: Option<String>,
}

/// Payload of a supercruise entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SupercruiseEntry {
    /// Current system.
    pub star_system: String,
    /// Whether the player is a passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
}

/// Payload of a supercruise exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SupercruiseExit {
    /// Current system.
    pub star_system: String,
    /// Body dropped at.
    pub body: Option<String>,
    /// Body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
    /// Body category.
    pub body_type: Option<String>,
    /// Whether the player is a passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
}

/// Payload of a supercruise destination drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DestinationDrop {
    /// Destination description.
    #[serde(rename = "Type")]
    pub destination: String,
    /// Threat level of the destination.
    pub threat: u32,
    /// Market identifier, when the destination is a station.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
}

/// Payload of a docking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Docked {
    /// Station name.
    pub station_name: String,
    /// Station type.
    pub station_type: StationType,
    /// Current system.
    pub star_system: String,
    /// Current system address.
    pub system_address: Option<u64>,
    /// Station market identifier.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
    /// Whether the player is a passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
    /// Whether the player is wanted at this station.
    pub wanted: bool,
}

/// Payload of an undocking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Undocked {
    /// Station name.
    pub station_name: String,
    /// Station type.
    pub station_type: StationType,
    /// Station market identifier.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
    /// Whether the player is a passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
}

/// Payload of a docking permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DockingGranted {
    /// Station name.
    pub station_name: String,
    /// Station type.
    pub station_type: StationType,
    /// Station market identifier.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
    /// Assigned landing pad.
    pub landing_pad: u32,
}

/// Payload of a touchdown or liftoff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SurfaceContact {
    /// Body landed on.
    pub body: Option<String>,
    /// Body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
    /// Surface latitude.
    pub latitude: Option<f64>,
    /// Surface longitude.
    pub longitude: Option<f64>,
    /// Whether the player was flying. Absent means yes.
    pub player_controlled: Option<bool>,
    /// Whether the player is a passenger.
    pub taxi: bool,
    /// Whether the player is crewing another commander's ship.
    pub multicrew: bool,
}

impl SurfaceContact {
    /// Whether the player was at the controls.
    pub fn is_player_controlled(&self) -> bool {
        self.player_controlled.unwrap_or(true)
    }
}

/// Payload of an SRV or fighter launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VehicleLaunch {
    /// Loadout name of the launched vehicle.
    pub loadout: Option<String>,
    /// Whether the player took control. Absent means yes.
    pub player_controlled: Option<bool>,
}

impl VehicleLaunch {
    /// Whether the player took control of the launched vehicle.
    pub fn is_player_controlled(&self) -> bool {
        self.player_controlled.unwrap_or(true)
    }
}

/// Payload of a control switch between ship and fighter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VehicleSwitch {
    /// The vehicle now under control.
    pub to: VehicleTarget,
}

/// Payload of an embark or disembark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Transfer {
    /// Whether the vehicle is an SRV.
    #[serde(rename = "SRV")]
    pub srv: bool,
    /// Whether the vehicle is a taxi or drop ship.
    pub taxi: bool,
    /// Whether the vehicle belongs to another commander.
    pub multicrew: bool,
    /// Whether the transfer happened inside a station.
    pub on_station: bool,
    /// Whether the transfer happened on a planetary surface.
    pub on_planet: bool,
    /// Station name, when on a station.
    pub station_name: Option<String>,
    /// Station type, when on a station.
    pub station_type: StationType,
    /// Current system.
    pub star_system: Option<String>,
    /// Current body.
    pub body: Option<String>,
    /// Current body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
}

/// Payload of a taxi or drop-ship booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BookingDetails {
    /// Fare paid.
    pub cost: u64,
    /// Destination system.
    pub destination_system: Option<String>,
    /// Destination station or body.
    pub destination_location: Option<String>,
    /// Whether this is a retreat booking from a combat zone.
    pub retreat: bool,
}

/// Payload of a body approach or departure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BodyDetails {
    /// Current system.
    pub star_system: String,
    /// Body name.
    pub body: String,
    /// Body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
}

/// Payload of joining or leaving a crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CrewDetails {
    /// Captain of the crew.
    pub captain: String,
}

/// Payload of a ship loadout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipDetails {
    /// Internal ship model name.
    pub ship: String,
    /// Per-commander ship identifier.
    #[serde(rename = "ShipID")]
    pub ship_id: Option<u64>,
    /// Player-given ship name.
    pub ship_name: Option<String>,
    /// Player-given ship ident.
    pub ship_ident: Option<String>,
}

/// Payload of a ship swap at a shipyard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipyardSwap {
    /// Internal ship model name of the ship now in use.
    pub ship_type: String,
    /// Per-commander identifier of the ship now in use.
    #[serde(rename = "ShipID")]
    pub ship_id: Option<u64>,
}

/// Payload of a jet cone boost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JetConeBoost {
    /// Range multiplier for the next jump.
    pub boost_value: Decimal,
}

/// Payload of a suit loadout snapshot or switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SuitDetails {
    /// Suit identifier.
    #[serde(rename = "SuitID")]
    pub suit_id: Option<u64>,
    /// Internal suit name.
    pub suit_name: String,
    /// Loadout identifier.
    #[serde(rename = "LoadoutID")]
    pub loadout_id: Option<u64>,
    /// Player-given loadout name.
    pub loadout_name: Option<String>,
}

/// Payload of an on-foot item pickup, drop, or use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemDetails {
    /// Internal item name.
    pub name: String,
    /// Item category.
    #[serde(rename = "Type")]
    pub item_type: String,
    /// Quantity affected.
    pub count: u32,
}

/// One stack in an inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryItem {
    /// Internal item name.
    pub name: String,
    /// Quantity held.
    pub count: u32,
}

/// Payload of a ship-locker or backpack snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Inventory {
    /// Goods.
    pub items: Vec<InventoryItem>,
    /// Engineering components.
    pub components: Vec<InventoryItem>,
    /// Consumables.
    pub consumables: Vec<InventoryItem>,
    /// Data items.
    pub data: Vec<InventoryItem>,
}

impl Inventory {
    /// Whether the snapshot lists nothing at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.components.is_empty()
            && self.consumables.is_empty()
            && self.data.is_empty()
    }
}

/// Payload of an outfitting, market, or shipyard listing.
///
/// Listing rows are kept opaque; the engine only cares whether a listing
/// had data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Listing {
    /// Station market identifier.
    #[serde(rename = "MarketID")]
    pub market_id: Option<u64>,
    /// Station name.
    pub station_name: Option<String>,
    /// Current system.
    pub star_system: Option<String>,
    /// Listing rows (shipyards report these as `PriceList`).
    #[serde(alias = "PriceList")]
    pub items: Vec<serde_json::Value>,
}

/// Payload of a body scan or surface mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScanDetails {
    /// Scanned body name.
    pub body_name: String,
    /// Scanned body identifier.
    #[serde(rename = "BodyID")]
    pub body_id: Option<u32>,
    /// System of the scanned body.
    pub star_system: String,
    /// Distance from the arrival point in light seconds.
    #[serde(rename = "DistanceFromArrivalLS")]
    pub distance_from_arrival_ls: Decimal,
    /// Whether someone else had already discovered the body.
    pub was_discovered: bool,
}

/// Payload of a full-spectrum discovery honk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscoveryScan {
    /// Number of bodies in the system.
    pub body_count: u32,
    /// Current system.
    pub system_name: String,
}
