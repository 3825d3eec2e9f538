//! Travel-state machine for the Starlog history engine.
//!
//! Derives what the player is doing (travel mode), where they are, and the
//! transient pointers that matter for travel (docking grant, pending jump,
//! passenger booking) from one event at a time.
//!
//! # Architecture
//!
//! - [`state`] -- The [`TravelState`] snapshot
//! - [`transition`] -- The pure [`update`] function
//! - [`location`] -- Mode precedence for location-kind events
//! - [`vehicle`] -- SRV and fighter lookup table
//!
//! Snapshots are threaded explicitly by the caller. The machine holds no
//! state of its own, so replaying the same events always yields the same
//! snapshots.

pub mod location;
pub mod state;
pub mod transition;
pub mod vehicle;

pub use state::TravelState;
pub use transition::update;
