//! Client configuration loading

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mcstatus_core::ClientConfig;

const CONFIG_DIR: &str = "mcstatus";
const CONFIG_FILE: &str = "config.json";

/// `<config_dir>/mcstatus/config.json`
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Defaults, then the config file, then environment variables.
pub fn load_client_config() -> Result<ClientConfig> {
    let base = match config_file_path() {
        Some(path) => load_from(&path)?,
        None => {
            tracing::debug!("No config directory on this platform, using defaults");
            ClientConfig::default()
        }
    };

    let config = base
        .with_env_overrides()
        .validated()
        .context("Invalid client configuration")?;

    tracing::info!(
        "Using status API {} and protocol data {}",
        config.api_host,
        config.protocol_data_host
    );
    Ok(config)
}

fn load_from(path: &Path) -> Result<ClientConfig> {
    ClientConfig::load_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
