//! Interfaces to the collaborators notified during reconstruction.
//!
//! The assembly loop never touches storage or presentation directly. It
//! calls a [`HistorySink`] for visit tracking, record indexing and display
//! names, and an [`EventLog`] for the one repair it performs on the
//! persisted log. Calls are strictly sequential and never overlap.

use chrono::{DateTime, Utc};

use starlog_types::{Event, EventId, StarSystem};

/// Errors a sink may return when asked to index a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// The record cannot be indexed (for example a scan of an unknown body).
    #[error("record {id} rejected: {reason}")]
    Rejected {
        /// The rejected record.
        id: EventId,
        /// Why the sink rejected it.
        reason: String,
    },

    /// The sink cannot accept records right now.
    #[error("collaborator unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },
}

/// Errors that can occur when repairing the persisted log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepairError {
    /// The record to delete does not exist.
    #[error("record {id} not found in the log")]
    NotFound {
        /// The missing record.
        id: EventId,
    },

    /// The log could not be rewritten.
    #[error("failed to delete record {id}: {message}")]
    Storage {
        /// The record being deleted.
        id: EventId,
        /// Description of the failure.
        message: String,
    },
}

/// What kind of identifier a display name is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Internal ship model name (`"python"`, `"krait_mkii"`).
    Ship,
    /// Body name.
    Body,
    /// Internal suit name (`"utilitysuit_class1"`).
    Suit,
}

/// Receiver of side-effect notifications fired during reconstruction.
///
/// Every method has a no-op default, so a sink implements only what it
/// cares about.
pub trait HistorySink {
    /// The player arrived in `system` at `at`.
    fn register_visit(&mut self, system: &StarSystem, at: DateTime<Utc>) {
        let _ = (system, at);
    }

    /// Index a scan or discovery record under `system`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the record cannot be indexed. The
    /// record stays in the timeline either way.
    fn index_record(&mut self, system: &str, record: &Event) -> Result<(), CollaboratorError> {
        let _ = (system, record);
        Ok(())
    }

    /// A display name for a raw identifier, or `None` to use it as is.
    fn resolve_name(&mut self, kind: NameKind, raw: &str) -> Option<String> {
        let _ = (kind, raw);
        None
    }

    /// An entry could not be fully processed. Informational only.
    fn report(&mut self, event: &Event, problem: &str) {
        let _ = (event, problem);
    }
}

/// The persisted session log, as far as reconstruction needs it.
pub trait EventLog {
    /// Permanently delete a record.
    ///
    /// # Errors
    ///
    /// Returns [`RepairError`] if the record cannot be deleted.
    fn delete_event(&mut self, id: EventId) -> Result<(), RepairError>;
}

/// A sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink.
    pub const fn new() -> Self {
        Self
    }
}

impl HistorySink for NoOpSink {}

/// A log that cannot be repaired. Deletions are accepted and dropped,
/// which suits replaying a read-only copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyLog;

impl EventLog for ReadOnlyLog {
    fn delete_event(&mut self, _id: EventId) -> Result<(), RepairError> {
        Ok(())
    }
}
