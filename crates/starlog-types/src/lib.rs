//! Shared type definitions for the Starlog history engine.
//!
//! This crate is the single source of truth for the values that flow
//! between the reorder queue, the travel-state machine, the travel
//! accumulator, and the assembly loop.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier of a record in the persisted session log
//! - [`enums`] -- Travel modes, event type tags, payload enums
//! - [`event`] -- The immutable [`Event`] record and its payloads
//! - [`structs`] -- Domain values carried into derived travel state

pub mod enums;
pub mod event;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{BookingKind, EventType, GameMode, JumpType, StationType, TravelMode, VehicleTarget};
pub use event::{
    BodyDetails, BookingDetails, CrewDetails, DestinationDrop, DiscoveryScan, Docked,
    DockingGranted, Event, EventKind, FsdJump, Inventory, InventoryItem, ItemDetails,
    JetConeBoost, Listing, LoadGame, LocationDetails, ScanDetails, ShipDetails, ShipyardSwap,
    StartJump, SuitDetails, SupercruiseEntry, SupercruiseExit, SurfaceContact, Transfer,
    Undocked, VehicleLaunch, VehicleSwitch,
};
pub use ids::EventId;
pub use structs::{
    Booking, DockingGrant, GameSession, JumpStart, LocationRef, ShipRef, StarSystem, StationRef,
};
