//! Unified error type definitions

use serde::Serialize;
use thiserror::Error;

/// Message shown when the status API gives no usable error text.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to retrieve the status of the specified server.";

/// Status lookup error type
///
/// `ValidationError` is a gating error: it stops a request from ever being
/// built. All other variants are retrieval errors scoped to a single lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StatusError {
    /// Input rejected before any request was built
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Transport-level failure (connect, TLS, body read)
    #[error("{0}")]
    NetworkError(String),

    /// The API answered with a non-200 status
    #[error("{message}")]
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Response body, or the default failure message when empty.
        message: String,
    },

    /// A 200 response whose body could not be parsed
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StatusError {
    /// Human-readable message for a `Failure` result.
    ///
    /// Falls back to [`DEFAULT_FAILURE_MESSAGE`] when the underlying error
    /// carries no text at all.
    pub fn failure_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Whether this error was raised before reaching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

/// Status lookup Result type alias
pub type StatusResult<T> = std::result::Result<T, StatusError>;
