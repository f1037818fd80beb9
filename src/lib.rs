//! logsift — log file triage for an interactive review shell.
//!
//! This crate re-exports the analysis core and the intake/session layer so a
//! host shell (and the integration tests) can depend on a single crate.
//!
//! # Architecture
//!
//! ```text
//! Upload ──► Reader ──► Analyzer ──► Session ──► filter_files ──► view
//!                                       │
//!                                       └──────► aggregate ──► stats
//! ```
//!
//! Reads run on tokio tasks; analysis, filtering, and aggregation are
//! synchronous and run on the session owner's task.

pub use logsift_core::{
    analyze, classify, config, extract, filter, filter_files, aggregate, stats, timestamp,
    types, Analyzer, Category, CategoryCounts, CategoryFilter, DashboardStats, ExtractedTimestamp,
    FileId, FilterQuery, LogEntry, LogFile, TimestampExtractor, TimestampSummary,
};
pub use logsift_intake::{IntakeError, Session, UploadCandidate, UploadReport, UploadSource};

use logsift_core::config::{Config, LoggingConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Host-shell bootstrap: load configuration, install tracing, open a session.
///
/// `config_path` overrides the default `~/.config/logsift/config.toml`. Either
/// way a missing file is created with the built-in defaults.
pub fn start(config_path: Option<&Path>) -> anyhow::Result<Session> {
    let config = match config_path {
        Some(path) => Config::load_or_create(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging)?;
    Ok(Session::new(config.intake))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.filter`. With a `debug_log` path set, output
/// is appended there without ANSI colours (tail -f to inspect); otherwise it
/// goes to stderr. Returns `Ok(false)` if a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<bool> {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let installed = match config.debug_log_path() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::info!(debug_log = %config.debug_log, "logsift tracing started");
    }
    Ok(installed)
}
