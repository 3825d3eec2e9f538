//! History reconstruction for the Starlog history engine.
//!
//! This crate ties the reorder queue, the travel-state machine and the
//! travel accumulator together into one assembly loop that turns an ordered
//! batch of session-log events into a [`Timeline`].
//!
//! # Architecture
//!
//! - [`config`] -- YAML configuration with defaults and env overrides
//! - [`history`] -- [`HistoryBuilder`] and the [`build`] batch entry point
//! - [`timeline`] -- The append-only [`Timeline`] and its "as of entry" queries
//! - [`collaborators`] -- [`HistorySink`] and [`EventLog`] interfaces
//! - [`cancel`] -- Cooperative cancellation between events
//!
//! Reconstruction is synchronous and single-threaded. It never blocks on
//! I/O; collaborators are called in event order, one call at a time.

pub mod cancel;
pub mod collaborators;
pub mod config;
pub mod history;
pub mod timeline;

pub use cancel::CancelFlag;
pub use collaborators::{
    CollaboratorError, EventLog, HistorySink, NameKind, NoOpSink, ReadOnlyLog, RepairError,
};
pub use config::{ConfigError, StarlogConfig};
pub use history::{build, HistoryBuilder, HistoryError, HistoryStats, Reconstruction};
pub use timeline::{Timeline, TimelineEntry};
