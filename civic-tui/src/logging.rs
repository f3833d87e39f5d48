//! File-only tracing setup for the TUI.
//!
//! Nothing may write to stdout or stderr while the terminal is in raw,
//! alternate-screen mode, so every event goes to a daily rolling JSON file.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "civic-report.log";

/// Directory the rolling log lands in.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("civic-report").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {e}");
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_target(true)
        .with_filter(env_filter);

    if tracing_subscriber::registry().with(file_layer).try_init().is_err() {
        eprintln!("Logging already initialized");
    }

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    guard
}
