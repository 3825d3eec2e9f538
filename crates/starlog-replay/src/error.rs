//! Error types for the replay binary.
//!
//! [`ReplayError`] is the top-level error type that `main` propagates.

use crate::journal::JournalError;

/// Top-level error for the replay binary.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: starlog_core::ConfigError,
    },

    /// The session log could not be read or rewritten.
    #[error("journal error: {source}")]
    Journal {
        /// The underlying journal error.
        #[from]
        source: JournalError,
    },

    /// A blocking task panicked or was cancelled by the runtime.
    #[error("background task failed: {message}")]
    Task {
        /// Description of the task failure.
        message: String,
    },

    /// No session log path was given.
    #[error("usage: starlog-replay <journal.jsonl>")]
    Usage,
}

impl From<tokio::task::JoinError> for ReplayError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task {
            message: err.to_string(),
        }
    }
}
