//! Session-log replay for the Starlog history engine.
//!
//! Reads a JSON-lines session log, reconstructs the travel history, repairs
//! known-corrupt records in the file, and logs a travel summary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `starlog-config.yaml` (or `STARLOG_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Read the session log on a blocking task
//! 4. Install the Ctrl-C handler as cooperative cancellation
//! 5. Reconstruct the history on a blocking task
//! 6. Apply queued log repairs
//! 7. Log the result

mod error;
mod journal;
mod sink;

use std::path::PathBuf;

use chrono::Utc;
use starlog_core::config::{config_path, LogFormat, LoggingConfig};
use starlog_core::{build, CancelFlag, Reconstruction, StarlogConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ReplayError;
use crate::journal::JournalFile;
use crate::sink::VisitCounter;

/// Application entry point for the replay tool.
///
/// # Errors
///
/// Returns an error if the configuration or the session log cannot be
/// read, or the log cannot be repaired.
#[tokio::main]
async fn main() -> Result<(), ReplayError> {
    // 1. Load configuration.
    let path = config_path();
    let config_found = path.exists();
    let config = if config_found {
        StarlogConfig::from_file(&path)?
    } else {
        StarlogConfig::default()
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("starlog-replay starting");
    if config_found {
        info!(path = %path.display(), "Configuration loaded");
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
    }

    let log_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ReplayError::Usage)?;

    // 3. Read the session log.
    let mut journal = tokio::task::spawn_blocking(move || JournalFile::open(&log_path)).await??;

    // 4. Ctrl-C stops reconstruction between events.
    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupt received, stopping reconstruction");
                cancel.cancel();
            }
        });
    }

    // 5. Reconstruct.
    let grace = config.travel.jump_overdue_grace();
    let (result, counter, mut journal) = tokio::task::spawn_blocking(move || {
        let mut counter = VisitCounter::default();
        let events = journal.take_events();
        let result = build(events, &config, &mut counter, &mut journal, &cancel);
        (result, counter, journal)
    })
    .await?;

    // 6. Repair the log.
    if !journal.pending_deletions().is_empty() {
        let deleted = tokio::task::spawn_blocking(move || journal.commit_deletions()).await??;
        info!(deleted, "Corrupt records removed from session log");
    }

    // 7. Log results.
    log_summary(&result, &counter);
    if result.timeline.jump_overdue(Utc::now(), grace) {
        warn!("Last hyperspace charge never completed");
    }
    info!(cancelled = result.cancelled, "starlog-replay finished");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn log_summary(result: &Reconstruction, counter: &VisitCounter) {
    let timeline = &result.timeline;
    let Some(last) = timeline.last() else {
        warn!("Session log produced no timeline entries");
        return;
    };

    let summary = timeline.summary_as_of(last.index);
    info!(
        entries = timeline.len(),
        episodes = timeline.episodes().len(),
        travelling = last.travelling,
        summary = %summary,
        "Travel summary"
    );
    info!(
        mode = last.travel.mode.label(),
        system = last.travel.system_name().unwrap_or("unknown"),
        station = last.travel.station_name(),
        ship = last.travel.ship.as_ref().map(|s| s.ship_type.as_str()),
        last_arrival = ?counter.last_arrival(),
        "Final state"
    );
    info!(
        systems = counter.visits().len(),
        indexed_systems = counter.records().len(),
        problems = counter.problems(),
        "Collaborator totals"
    );
    for (system, visits) in counter.most_visited(5) {
        info!(system, visits, "Frequently visited");
    }
}
