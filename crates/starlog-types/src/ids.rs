//! Type-safe identifier for records in the persisted session log.
//!
//! The log store assigns each raw record a numeric identifier. The core
//! never invents identifiers of its own; it only carries them so that a
//! collaborator can act on the original record (for example, deleting a
//! known-corrupt entry).

use serde::{Deserialize, Serialize};

/// Identifier of one record in the persisted session log.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(pub u64);

impl EventId {
    /// Create an identifier from the raw store value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw store value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}
