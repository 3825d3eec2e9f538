//! Reorder and merge queue for Starlog session logs.
//!
//! The game reports some player actions as several records written in no
//! reliable order: disembarking alone produces a suit loadout, a backpack
//! snapshot and one or two ship-locker snapshots around the disembark
//! itself. This crate collapses such sequences into one representative
//! event and drops listing snapshots that repeat one already seen.
//!
//! # Architecture
//!
//! - [`table`] -- Which event opens, extends or closes which sequence
//! - [`queue`] -- The [`ReorderQueue`] holding at most one open sequence
//! - [`snapshot`] -- Bounded lookback for redundant listing snapshots

pub mod queue;
pub mod snapshot;
pub mod table;

pub use queue::{default_cutoff, QueueParams, ReorderQueue};
pub use table::{CloseMode, SequenceKind, Step};
