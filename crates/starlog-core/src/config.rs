//! Configuration loading and typed config structures for Starlog.
//!
//! The configuration lives in `starlog-config.yaml` next to the session
//! logs. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use starlog_events::{default_cutoff, QueueParams};
use starlog_types::EventType;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "STARLOG_CONFIG";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "STARLOG_LOG_LEVEL";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "starlog-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// The configuration path: [`CONFIG_PATH_ENV`] if set, otherwise
/// [`DEFAULT_CONFIG_FILE`] in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

/// Top-level configuration.
///
/// Mirrors the structure of `starlog-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StarlogConfig {
    /// Reorder/merge queue settings.
    #[serde(default)]
    pub reorder: ReorderConfig,

    /// Events dropped or repaired before reconstruction.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Travel-state settings.
    #[serde(default)]
    pub travel: TravelConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StarlogConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `STARLOG_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Reorder/merge queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReorderConfig {
    /// Whether sequences are collapsed at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Events before this instant pass through unchanged.
    #[serde(default = "default_cutoff")]
    pub cutoff: DateTime<Utc>,

    /// Unrelated events tolerated before an open sequence is flushed.
    #[serde(default = "default_sequence_expiry")]
    pub sequence_expiry: u32,

    /// Emitted events remembered for repeated-listing suppression.
    #[serde(default = "default_lookback_limit")]
    pub lookback_limit: usize,
}

impl ReorderConfig {
    /// Queue parameters for this configuration.
    pub const fn queue_params(&self) -> QueueParams {
        QueueParams {
            enabled: self.enabled,
            cutoff: self.cutoff,
            sequence_expiry: self.sequence_expiry,
            lookback_limit: self.lookback_limit,
        }
    }
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cutoff: default_cutoff(),
            sequence_expiry: default_sequence_expiry(),
            lookback_limit: default_lookback_limit(),
        }
    }
}

/// Event filtering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    /// Event types dropped before reconstruction.
    #[serde(default = "default_discard_events")]
    pub discard_events: Vec<EventType>,

    /// Placeholder system names written by known-corrupt jump records.
    #[serde(default = "default_corrupt_system_names")]
    pub corrupt_system_names: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            discard_events: default_discard_events(),
            corrupt_system_names: default_corrupt_system_names(),
        }
    }
}

/// Travel-state configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TravelConfig {
    /// Seconds after a hyperspace charge before the jump counts as overdue.
    #[serde(default = "default_jump_overdue_seconds")]
    pub jump_overdue_seconds: u64,
}

impl TravelConfig {
    /// The overdue grace period as a duration.
    pub fn jump_overdue_grace(&self) -> TimeDelta {
        i64::try_from(self.jump_overdue_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            jump_overdue_seconds: default_jump_overdue_seconds(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Apply environment variable overrides.
    ///
    /// - `STARLOG_LOG_LEVEL` overrides `level`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_sequence_expiry() -> u32 {
    10
}

const fn default_lookback_limit() -> usize {
    256
}

fn default_discard_events() -> Vec<EventType> {
    vec![EventType::Music, EventType::ReservoirReplenished]
}

fn default_corrupt_system_names() -> Vec<String> {
    vec!["Training".to_owned()]
}

const fn default_jump_overdue_seconds() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_owned()
}
