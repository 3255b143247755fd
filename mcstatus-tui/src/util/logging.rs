//! File-backed tracing subscriber

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter variable, e.g. `MCSTATUS_LOG=mcstatus_core=debug`.
pub const LOG_ENV: &str = "MCSTATUS_LOG";

const DEFAULT_FILTER: &str = "info";

/// `<cache_dir>/mcstatus/tui.log`, falling back to the working directory.
fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("mcstatus"))
        .unwrap_or_default()
        .join("tui.log")
}

/// Install the global subscriber and return the log file path.
///
/// `log` records from the core crate are bridged in by `try_init`.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}
