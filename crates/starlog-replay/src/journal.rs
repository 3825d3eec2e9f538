//! JSON-lines session logs on disk.
//!
//! A [`JournalFile`] reads one event per line. Record ids are line numbers
//! starting at 1, so a deletion requested during reconstruction can be
//! traced back to the line that produced the event. Deletions are collected
//! and applied in one rewrite by [`JournalFile::commit_deletions`], which
//! keeps earlier line numbers valid while reconstruction is running.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use starlog_core::{EventLog, RepairError};
use starlog_types::{Event, EventId};

/// Errors that can occur reading or rewriting a session log.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// The log could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The log file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The log could not be rewritten.
    #[error("failed to rewrite {path}: {source}")]
    Write {
        /// The log file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A session log loaded from disk.
#[derive(Debug)]
pub struct JournalFile {
    path: PathBuf,
    line_count: u64,
    events: Vec<Event>,
    deletions: BTreeSet<EventId>,
}

impl JournalFile {
    /// Read and parse the log at `path`.
    ///
    /// Blank lines are ignored. Lines that do not parse are logged and
    /// skipped; they never stop the load.
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        let contents = fs::read_to_string(path).map_err(|source| JournalError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut journal = Self::parse(&contents);
        journal.path = path.to_owned();
        info!(
            path = %path.display(),
            lines = journal.line_count,
            events = journal.events.len(),
            "Session log loaded"
        );
        Ok(journal)
    }

    /// Parse log contents that are not backed by a file.
    pub fn parse(contents: &str) -> Self {
        let mut events = Vec::new();
        let mut line_count = 0_u64;
        for line in contents.lines() {
            line_count = line_count.saturating_add(1);
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Event>(line) {
                Ok(mut event) => {
                    event.id = EventId::new(line_count);
                    events.push(event);
                }
                Err(err) => warn!(line = line_count, %err, "Skipping malformed log line"),
            }
        }
        events.sort_by_key(|e| e.timestamp);
        Self {
            path: PathBuf::new(),
            line_count,
            events,
            deletions: BTreeSet::new(),
        }
    }

    /// The parsed events in timestamp order. The journal keeps its
    /// bookkeeping for deletions.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Records queued for deletion.
    pub const fn pending_deletions(&self) -> &BTreeSet<EventId> {
        &self.deletions
    }

    /// Rewrite the log without the records queued for deletion. Does
    /// nothing when none are queued.
    pub fn commit_deletions(&mut self) -> Result<usize, JournalError> {
        if self.deletions.is_empty() {
            return Ok(0);
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| JournalError::Read {
            path: self.path.clone(),
            source,
        })?;
        let kept = retain_lines(&contents, &self.deletions);
        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, kept)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|source| JournalError::Write {
                path: self.path.clone(),
                source,
            })?;
        let count = self.deletions.len();
        info!(path = %self.path.display(), deleted = count, "Session log repaired");
        self.deletions.clear();
        Ok(count)
    }
}

impl EventLog for JournalFile {
    fn delete_event(&mut self, id: EventId) -> Result<(), RepairError> {
        if id.into_inner() == 0 || id.into_inner() > self.line_count {
            return Err(RepairError::NotFound { id });
        }
        debug!(%id, "Queued log line for deletion");
        self.deletions.insert(id);
        Ok(())
    }
}

/// `contents` without the lines whose 1-based number is in `deleted`.
fn retain_lines(contents: &str, deleted: &BTreeSet<EventId>) -> String {
    let mut out = String::with_capacity(contents.len());
    for (line, number) in contents.lines().zip(1_u64..) {
        if !deleted.contains(&EventId::new(number)) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
