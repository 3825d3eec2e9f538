//! Enumeration types shared across the Starlog workspace.
//!
//! Travel modes, event type tags, and the small string-backed enums that
//! appear inside event payloads (station types, game modes, jump types).
//! String-backed enums never fail to deserialize: an unrecognised value
//! degrades to an `Unknown` variant.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Travel mode
// ---------------------------------------------------------------------------

/// What the player is doing right now, derived from the event stream.
///
/// The variants are mutually exclusive. Multicrew, taxi and drop-ship
/// variants mirror the solo-ship variants so that a transition can keep the
/// "whose vehicle is this" distinction while changing the activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TravelMode {
    /// No qualifying event seen yet, or state lost (death, restart).
    #[default]
    Unknown,
    /// Docked at an orbital station in the player's own ship.
    Docked,
    /// Docked at a planetary port in the player's own ship.
    DockedPlanet,
    /// Flying in normal space.
    NormalSpace,
    /// Flying in supercruise.
    Supercruise,
    /// Ship touched down on a planetary surface.
    Landed,
    /// Driving a surface recon vehicle.
    Srv,
    /// Flying a ship-launched fighter.
    Fighter,
    /// On foot inside an orbital starport.
    OnFootStarPort,
    /// On foot inside a planetary port.
    OnFootPlanetaryPort,
    /// On foot at a surface settlement or installation.
    OnFootInstallation,
    /// On foot on a planetary surface.
    OnFootPlanet,
    /// On foot aboard a fleet carrier.
    OnFootFleetCarrier,
    /// Aboard a taxi docked at an orbital station.
    TaxiDocked,
    /// Aboard a taxi docked at a planetary port.
    TaxiDockedPlanet,
    /// Aboard a taxi in normal space.
    TaxiNormalSpace,
    /// Aboard a taxi in supercruise.
    TaxiSupercruise,
    /// Aboard a drop ship while docked.
    DropShipDocked,
    /// Aboard a drop ship in normal space.
    DropShipNormalSpace,
    /// Aboard a drop ship in supercruise.
    DropShipSupercruise,
    /// Crewing another player's ship, docked at an orbital station.
    MulticrewDocked,
    /// Crewing another player's ship, docked at a planetary port.
    MulticrewDockedPlanet,
    /// Crewing another player's ship in normal space.
    MulticrewNormalSpace,
    /// Crewing another player's ship in supercruise.
    MulticrewSupercruise,
    /// Crewing another player's ship while it is landed.
    MulticrewLanded,
    /// Driving an SRV launched from another player's ship.
    MulticrewSrv,
    /// Flying a fighter launched from another player's ship.
    MulticrewFighter,
}

impl TravelMode {
    /// Every travel mode, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Unknown,
        Self::Docked,
        Self::DockedPlanet,
        Self::NormalSpace,
        Self::Supercruise,
        Self::Landed,
        Self::Srv,
        Self::Fighter,
        Self::OnFootStarPort,
        Self::OnFootPlanetaryPort,
        Self::OnFootInstallation,
        Self::OnFootPlanet,
        Self::OnFootFleetCarrier,
        Self::TaxiDocked,
        Self::TaxiDockedPlanet,
        Self::TaxiNormalSpace,
        Self::TaxiSupercruise,
        Self::DropShipDocked,
        Self::DropShipNormalSpace,
        Self::DropShipSupercruise,
        Self::MulticrewDocked,
        Self::MulticrewDockedPlanet,
        Self::MulticrewNormalSpace,
        Self::MulticrewSupercruise,
        Self::MulticrewLanded,
        Self::MulticrewSrv,
        Self::MulticrewFighter,
    ];

    /// Whether the player is crewing another commander's ship.
    pub const fn is_multicrew(self) -> bool {
        matches!(
            self,
            Self::MulticrewDocked
                | Self::MulticrewDockedPlanet
                | Self::MulticrewNormalSpace
                | Self::MulticrewSupercruise
                | Self::MulticrewLanded
                | Self::MulticrewSrv
                | Self::MulticrewFighter
        )
    }

    /// Whether the player is a passenger in a taxi.
    pub const fn is_taxi(self) -> bool {
        matches!(
            self,
            Self::TaxiDocked | Self::TaxiDockedPlanet | Self::TaxiNormalSpace | Self::TaxiSupercruise
        )
    }

    /// Whether the player is a passenger in a drop ship.
    pub const fn is_dropship(self) -> bool {
        matches!(
            self,
            Self::DropShipDocked | Self::DropShipNormalSpace | Self::DropShipSupercruise
        )
    }

    /// Whether the player is walking around.
    pub const fn is_on_foot(self) -> bool {
        matches!(
            self,
            Self::OnFootStarPort
                | Self::OnFootPlanetaryPort
                | Self::OnFootInstallation
                | Self::OnFootPlanet
                | Self::OnFootFleetCarrier
        )
    }

    /// Whether the vehicle the player is in is docked at a station.
    pub const fn is_docked(self) -> bool {
        matches!(
            self,
            Self::Docked
                | Self::DockedPlanet
                | Self::TaxiDocked
                | Self::TaxiDockedPlanet
                | Self::DropShipDocked
                | Self::MulticrewDocked
                | Self::MulticrewDockedPlanet
        )
    }

    /// Whether the player is in supercruise, in any vehicle.
    pub const fn is_supercruise(self) -> bool {
        matches!(
            self,
            Self::Supercruise
                | Self::TaxiSupercruise
                | Self::DropShipSupercruise
                | Self::MulticrewSupercruise
        )
    }

    /// The multicrew counterpart of a solo activity.
    ///
    /// Activities with no multicrew equivalent (on foot, passenger modes,
    /// unknown) map to [`TravelMode::MulticrewNormalSpace`], which is where
    /// a crew member finds themselves after joining.
    pub const fn to_multicrew(self) -> Self {
        match self {
            Self::Docked | Self::MulticrewDocked => Self::MulticrewDocked,
            Self::DockedPlanet | Self::MulticrewDockedPlanet => Self::MulticrewDockedPlanet,
            Self::Supercruise | Self::MulticrewSupercruise => Self::MulticrewSupercruise,
            Self::Landed | Self::MulticrewLanded => Self::MulticrewLanded,
            Self::Srv | Self::MulticrewSrv => Self::MulticrewSrv,
            Self::Fighter | Self::MulticrewFighter => Self::MulticrewFighter,
            _ => Self::MulticrewNormalSpace,
        }
    }

    /// The solo counterpart of a multicrew activity. Solo modes are
    /// returned unchanged.
    pub const fn to_solo(self) -> Self {
        match self {
            Self::MulticrewDocked => Self::Docked,
            Self::MulticrewDockedPlanet => Self::DockedPlanet,
            Self::MulticrewNormalSpace => Self::NormalSpace,
            Self::MulticrewSupercruise => Self::Supercruise,
            Self::MulticrewLanded => Self::Landed,
            Self::MulticrewSrv => Self::Srv,
            Self::MulticrewFighter => Self::Fighter,
            other => other,
        }
    }

    /// Short human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Docked => "Docked",
            Self::DockedPlanet => "Docked (planet)",
            Self::NormalSpace => "Normal space",
            Self::Supercruise => "Supercruise",
            Self::Landed => "Landed",
            Self::Srv => "SRV",
            Self::Fighter => "Fighter",
            Self::OnFootStarPort => "On foot (starport)",
            Self::OnFootPlanetaryPort => "On foot (planetary port)",
            Self::OnFootInstallation => "On foot (installation)",
            Self::OnFootPlanet => "On foot (planet)",
            Self::OnFootFleetCarrier => "On foot (fleet carrier)",
            Self::TaxiDocked => "Taxi docked",
            Self::TaxiDockedPlanet => "Taxi docked (planet)",
            Self::TaxiNormalSpace => "Taxi normal space",
            Self::TaxiSupercruise => "Taxi supercruise",
            Self::DropShipDocked => "Drop ship docked",
            Self::DropShipNormalSpace => "Drop ship normal space",
            Self::DropShipSupercruise => "Drop ship supercruise",
            Self::MulticrewDocked => "Multicrew docked",
            Self::MulticrewDockedPlanet => "Multicrew docked (planet)",
            Self::MulticrewNormalSpace => "Multicrew normal space",
            Self::MulticrewSupercruise => "Multicrew supercruise",
            Self::MulticrewLanded => "Multicrew landed",
            Self::MulticrewSrv => "Multicrew SRV",
            Self::MulticrewFighter => "Multicrew fighter",
        }
    }
}

impl core::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Payload enums (string-backed)
// ---------------------------------------------------------------------------

/// Kind of station or port reported by docking and location events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StationType {
    /// Coriolis orbital starport.
    Coriolis,
    /// Orbis orbital starport.
    Orbis,
    /// Ocellus orbital starport.
    Ocellus,
    /// Bernal sphere starport.
    Bernal,
    /// Small orbital outpost.
    Outpost,
    /// Station built into an asteroid.
    AsteroidBase,
    /// Megaship.
    MegaShip,
    /// Player-owned fleet carrier.
    FleetCarrier,
    /// Large planetary port.
    CraterPort,
    /// Small planetary outpost.
    CraterOutpost,
    /// Surface settlement.
    OnFootSettlement,
    /// Generic surface station.
    SurfaceStation,
    /// Missing or unrecognised station type.
    #[default]
    Unknown,
}

impl StationType {
    /// Whether the station sits on a planetary surface.
    pub const fn is_planetary(self) -> bool {
        matches!(
            self,
            Self::CraterPort | Self::CraterOutpost | Self::OnFootSettlement | Self::SurfaceStation
        )
    }

    /// Whether the station is a fleet carrier.
    pub const fn is_fleet_carrier(self) -> bool {
        matches!(self, Self::FleetCarrier)
    }

    /// Whether the station is a surface settlement.
    pub const fn is_settlement(self) -> bool {
        matches!(self, Self::OnFootSettlement)
    }

    /// The session-log spelling of this station type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coriolis => "Coriolis",
            Self::Orbis => "Orbis",
            Self::Ocellus => "Ocellus",
            Self::Bernal => "Bernal",
            Self::Outpost => "Outpost",
            Self::AsteroidBase => "AsteroidBase",
            Self::MegaShip => "MegaShip",
            Self::FleetCarrier => "FleetCarrier",
            Self::CraterPort => "CraterPort",
            Self::CraterOutpost => "CraterOutpost",
            Self::OnFootSettlement => "OnFootSettlement",
            Self::SurfaceStation => "SurfaceStation",
            Self::Unknown => "",
        }
    }
}

impl From<String> for StationType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Coriolis" => Self::Coriolis,
            "Orbis" => Self::Orbis,
            "Ocellus" => Self::Ocellus,
            "Bernal" => Self::Bernal,
            "Outpost" => Self::Outpost,
            "AsteroidBase" => Self::AsteroidBase,
            "MegaShip" => Self::MegaShip,
            "FleetCarrier" => Self::FleetCarrier,
            "CraterPort" => Self::CraterPort,
            "CraterOutpost" => Self::CraterOutpost,
            "OnFootSettlement" => Self::OnFootSettlement,
            "SurfaceStation" => Self::SurfaceStation,
            _ => Self::Unknown,
        }
    }
}

impl From<StationType> for String {
    fn from(station_type: StationType) -> Self {
        station_type.as_str().to_owned()
    }
}

/// Game mode the session was loaded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameMode {
    /// Shared open play.
    Open,
    /// Private group play.
    Group,
    /// Solo play.
    Solo,
    /// Missing or unrecognised mode.
    #[default]
    Unknown,
}

impl From<String> for GameMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Open" => Self::Open,
            "Group" => Self::Group,
            "Solo" => Self::Solo,
            _ => Self::Unknown,
        }
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::Open => "Open",
            GameMode::Group => "Group",
            GameMode::Solo => "Solo",
            GameMode::Unknown => "",
        }
        .to_owned()
    }
}

/// Kind of frame-shift charge reported by a jump-start event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JumpType {
    /// Charging for a jump to another star system.
    Hyperspace,
    /// Charging for supercruise within the current system.
    Supercruise,
    /// Missing or unrecognised jump type.
    #[default]
    Unknown,
}

impl From<String> for JumpType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Hyperspace" => Self::Hyperspace,
            "Supercruise" => Self::Supercruise,
            _ => Self::Unknown,
        }
    }
}

impl From<JumpType> for String {
    fn from(jump_type: JumpType) -> Self {
        match jump_type {
            JumpType::Hyperspace => "Hyperspace",
            JumpType::Supercruise => "Supercruise",
            JumpType::Unknown => "",
        }
        .to_owned()
    }
}

/// Vehicle the player switched control to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleTarget {
    /// The main ship.
    Mothership,
    /// A ship-launched fighter.
    Fighter,
    /// Missing or unrecognised target.
    #[default]
    Unknown,
}

impl From<String> for VehicleTarget {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Mothership" => Self::Mothership,
            "Fighter" => Self::Fighter,
            _ => Self::Unknown,
        }
    }
}

impl From<VehicleTarget> for String {
    fn from(target: VehicleTarget) -> Self {
        match target {
            VehicleTarget::Mothership => "Mothership",
            VehicleTarget::Fighter => "Fighter",
            VehicleTarget::Unknown => "",
        }
        .to_owned()
    }
}

/// Kind of passenger transport the player booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingKind {
    /// An Apex taxi.
    Taxi,
    /// A Frontline Solutions drop ship.
    DropShip,
}

// ---------------------------------------------------------------------------
// Event type tag
// ---------------------------------------------------------------------------

/// Fieldless tag for every event kind the engine understands.
///
/// The serialized names match the session-log spelling so that tags can be
/// listed in configuration (for example the permanent-discard blacklist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Game session loaded.
    LoadGame,
    /// Game process shut down cleanly.
    Shutdown,
    /// Player died.
    Died,
    /// Player resurrected after death.
    Resurrect,
    /// Full location snapshot.
    Location,
    /// Hyperspace jump completed.
    #[serde(rename = "FSDJump")]
    FsdJump,
    /// Fleet carrier jumped with the player aboard.
    CarrierJump,
    /// Frame-shift drive charging.
    StartJump,
    /// Entered supercruise.
    SupercruiseEntry,
    /// Dropped out of supercruise.
    SupercruiseExit,
    /// Dropped out of supercruise at a selected destination.
    SupercruiseDestinationDrop,
    /// Docked at a station.
    Docked,
    /// Undocked from a station.
    Undocked,
    /// Docking request granted.
    DockingGranted,
    /// Docking request cancelled.
    DockingCancelled,
    /// Docking request timed out.
    DockingTimeout,
    /// Ship touched down on a surface.
    Touchdown,
    /// Ship lifted off from a surface.
    Liftoff,
    /// SRV deployed.
    #[serde(rename = "LaunchSRV")]
    LaunchSrv,
    /// SRV recovered into the ship.
    #[serde(rename = "DockSRV")]
    DockSrv,
    /// SRV destroyed.
    #[serde(rename = "SRVDestroyed")]
    SrvDestroyed,
    /// Fighter launched.
    LaunchFighter,
    /// Fighter recovered into the ship.
    DockFighter,
    /// Fighter destroyed.
    FighterDestroyed,
    /// Control switched between ship and fighter.
    VehicleSwitch,
    /// Player boarded a vehicle.
    Embark,
    /// Player left a vehicle on foot.
    Disembark,
    /// Taxi booked.
    BookTaxi,
    /// Taxi booking cancelled.
    CancelTaxi,
    /// Drop ship booked.
    BookDropship,
    /// Drop ship booking cancelled.
    CancelDropship,
    /// Approached a planetary body.
    ApproachBody,
    /// Left the vicinity of a planetary body.
    LeaveBody,
    /// Joined another commander's crew.
    JoinACrew,
    /// Left another commander's crew.
    QuitACrew,
    /// Crew session ended by the captain.
    EndCrewSession,
    /// Full ship loadout.
    Loadout,
    /// Switched to another stored ship.
    ShipyardSwap,
    /// Neutron or white dwarf jet cone boost.
    JetConeBoost,
    /// Suit loadout snapshot.
    SuitLoadout,
    /// Switched suit loadout.
    SwitchSuitLoadout,
    /// Picked up on-foot items.
    CollectItems,
    /// Dropped on-foot items.
    DropItems,
    /// Used an on-foot consumable.
    UseConsumable,
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
    ShipLocker,
    /// Backpack inventory snapshot.
    Backpack,
    /// Outfitting listing snapshot.
    Outfitting,
    /// Commodity market listing snapshot.
    Market,
    /// Shipyard listing snapshot.
    Shipyard,
    /// Body scan.
    Scan,
    /// Surface mapping completed.
    #[serde(rename = "SAAScanComplete")]
    SaaScanComplete,
    /// Full-spectrum discovery honk.
    #[serde(rename = "FSSDiscoveryScan")]
    FssDiscoveryScan,
    /// User-inserted marker opening a travel-accumulation episode.
    StartMarker,
    /// User-inserted marker closing a travel-accumulation episode.
    StopMarker,
    /// Soundtrack change.
    Music,
    /// Fuel reservoir topped up.
    ReservoirReplenished,
    /// An event kind the engine does not model.
    Unknown,
}

impl EventType {
    /// The session-log spelling of this event type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadGame => "LoadGame",
            Self::Shutdown => "Shutdown",
            Self::Died => "Died",
            Self::Resurrect => "Resurrect",
            Self::Location => "Location",
            Self::FsdJump => "FSDJump",
            Self::CarrierJump => "CarrierJump",
            Self::StartJump => "StartJump",
            Self::SupercruiseEntry => "SupercruiseEntry",
            Self::SupercruiseExit => "SupercruiseExit",
            Self::SupercruiseDestinationDrop => "SupercruiseDestinationDrop",
            Self::Docked => "Docked",
            Self::Undocked => "Undocked",
            Self::DockingGranted => "DockingGranted",
            Self::DockingCancelled => "DockingCancelled",
            Self::DockingTimeout => "DockingTimeout",
            Self::Touchdown => "Touchdown",
            Self::Liftoff => "Liftoff",
            Self::LaunchSrv => "LaunchSRV",
            Self::DockSrv => "DockSRV",
            Self::SrvDestroyed => "SRVDestroyed",
            Self::LaunchFighter => "LaunchFighter",
            Self::DockFighter => "DockFighter",
            Self::FighterDestroyed => "FighterDestroyed",
            Self::VehicleSwitch => "VehicleSwitch",
            Self::Embark => "Embark",
            Self::Disembark => "Disembark",
            Self::BookTaxi => "BookTaxi",
            Self::CancelTaxi => "CancelTaxi",
            Self::BookDropship => "BookDropship",
            Self::CancelDropship => "CancelDropship",
            Self::ApproachBody => "ApproachBody",
            Self::LeaveBody => "LeaveBody",
            Self::JoinACrew => "JoinACrew",
            Self::QuitACrew => "QuitACrew",
            Self::EndCrewSession => "EndCrewSession",
            Self::Loadout => "Loadout",
            Self::ShipyardSwap => "ShipyardSwap",
            Self::JetConeBoost => "JetConeBoost",
            Self::SuitLoadout => "SuitLoadout",
            Self::SwitchSuitLoadout => "SwitchSuitLoadout",
            Self::CollectItems => "CollectItems",
            Self::DropItems => "DropItems",
            Self::UseConsumable => "UseConsumable",
            Self::Resupply => "Resupply",
            Self::BuyMicroResources => "BuyMicroResources",
            Self::SellMicroResources => "SellMicroResources",
            Self::TradeMicroResources => "TradeMicroResources",
            Self::BackpackChange => "BackpackChange",
            Self::ShipLocker => "ShipLocker",
            Self::Backpack => "Backpack",
            Self::Outfitting => "Outfitting",
            Self::Market => "Market",
            Self::Shipyard => "Shipyard",
            Self::Scan => "Scan",
            Self::SaaScanComplete => "SAAScanComplete",
            Self::FssDiscoveryScan => "FSSDiscoveryScan",
            Self::StartMarker => "StartMarker",
            Self::StopMarker => "StopMarker",
            Self::Music => "Music",
            Self::ReservoirReplenished => "ReservoirReplenished",
            Self::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multicrew_round_trips_through_solo() {
        for mode in [
            TravelMode::Docked,
            TravelMode::DockedPlanet,
            TravelMode::NormalSpace,
            TravelMode::Supercruise,
            TravelMode::Landed,
            TravelMode::Srv,
            TravelMode::Fighter,
        ] {
            let crewed = mode.to_multicrew();
            assert!(crewed.is_multicrew(), "{mode:?} -> {crewed:?}");
            assert_eq!(crewed.to_solo(), mode);
        }
    }

    #[test]
    fn passenger_modes_join_crew_in_normal_space() {
        assert_eq!(
            TravelMode::TaxiSupercruise.to_multicrew(),
            TravelMode::MulticrewNormalSpace
        );
        assert_eq!(
            TravelMode::OnFootPlanet.to_multicrew(),
            TravelMode::MulticrewNormalSpace
        );
    }

    #[test]
    fn all_modes_are_distinct() {
        let unique: std::collections::BTreeSet<TravelMode> = TravelMode::ALL.into_iter().collect();
        assert_eq!(unique.len(), TravelMode::ALL.len());
    }

    #[test]
    fn unknown_station_type_degrades() {
        let parsed: Result<StationType, _> = serde_json::from_str("\"Dodecahedron\"");
        assert!(matches!(parsed, Ok(StationType::Unknown)));

        let carrier: Result<StationType, _> = serde_json::from_str("\"FleetCarrier\"");
        assert!(matches!(carrier, Ok(StationType::FleetCarrier)));
    }

    #[test]
    fn event_type_names_match_log_spelling() {
        let parsed: Result<EventType, _> = serde_json::from_str("\"FSDJump\"");
        assert!(matches!(parsed, Ok(EventType::FsdJump)));
        assert_eq!(EventType::SrvDestroyed.as_str(), "SRVDestroyed");
        assert_eq!(EventType::FssDiscoveryScan.to_string(), "FSSDiscoveryScan");
    }
}
