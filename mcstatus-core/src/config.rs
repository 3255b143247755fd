//! Client configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! environment variables. The resulting [`ClientConfig`] is handed to
//! [`StatusClient::new`](crate::StatusClient::new) explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StatusError, StatusResult};

/// Public status API, v2.
pub const DEFAULT_API_HOST: &str = "https://api.mcstatus.io/v2";

/// minecraft-data, holding `{pc,bedrock}/common/protocolVersions.json`.
pub const DEFAULT_PROTOCOL_DATA_HOST: &str =
    "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/master/data";

/// Overrides [`ClientConfig::api_host`].
pub const ENV_API_HOST: &str = "MCSTATUS_API_HOST";

/// Overrides [`ClientConfig::protocol_data_host`].
pub const ENV_PROTOCOL_DATA_HOST: &str = "MCSTATUS_PROTOCOL_DATA_HOST";

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_protocol_data_host() -> String {
    DEFAULT_PROTOCOL_DATA_HOST.to_string()
}

fn default_user_agent() -> String {
    format!("mcstatus/{}", env!("CARGO_PKG_VERSION"))
}

/// Status client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the status API, without trailing slash.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Base URL of the protocol-version metadata files.
    #[serde(default = "default_protocol_data_host")]
    pub protocol_data_host: String,
    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            protocol_data_host: default_protocol_data_host(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> StatusResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| StatusError::ConfigError(format!("Invalid config file: {e}")))
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    pub fn load_file(path: &Path) -> StatusResult<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            StatusError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Takes the lookup as a closure so tests do not have to touch the
    /// process environment.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_API_HOST) {
            log::debug!("{ENV_API_HOST} overrides API host: {host}");
            self.api_host = host;
        }
        if let Some(host) = lookup(ENV_PROTOCOL_DATA_HOST) {
            log::debug!("{ENV_PROTOCOL_DATA_HOST} overrides protocol data host: {host}");
            self.protocol_data_host = host;
        }
        self
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Defaults plus environment overrides, validated.
    pub fn from_env() -> StatusResult<Self> {
        Self::default().with_env_overrides().validated()
    }

    /// Check both hosts and strip trailing slashes.
    pub fn validated(mut self) -> StatusResult<Self> {
        self.api_host = normalize_host("apiHost", &self.api_host)?;
        self.protocol_data_host = normalize_host("protocolDataHost", &self.protocol_data_host)?;
        Ok(self)
    }
}

fn normalize_host(field: &str, value: &str) -> StatusResult<String> {
    let value = value.trim().trim_end_matches('/');
    if value.is_empty() {
        return Err(StatusError::ConfigError(format!("{field} must not be empty")));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(StatusError::ConfigError(format!(
            "{field} must be an http(s) URL, got {value}"
        )));
    }
    Ok(value.to_string())
}
