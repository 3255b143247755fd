//! Server address validation.
//!
//! The accepted language is exactly
//! `^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*(:\d{1,5})?$`. Nothing is trimmed or
//! repaired; input either matches as a whole or is rejected.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{StatusError, StatusResult};
use crate::types::AddressSpec;

/// `host[:port]`, host made of dot-separated labels, port of 1 to 5 ASCII digits.
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<host>[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)(?::(?P<port>[0-9]{1,5}))?$")
        .unwrap_or_else(|e| unreachable!("address pattern is a valid regex: {e}"))
});

/// Outcome of validating a candidate address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Validation {
    /// Whether the input may be submitted.
    pub valid: bool,
    /// Canonical lower-cased `host[:port]`; empty when invalid.
    pub normalized: String,
}

/// Validate free-form user input. Pure; never fails.
pub fn validate_address(input: &str) -> Validation {
    match parse_address(input) {
        Ok(spec) => Validation {
            valid: true,
            normalized: spec.canonical(),
        },
        Err(_) => Validation::default(),
    }
}

/// Parse `input` into an [`AddressSpec`], rejecting anything outside the
/// accepted language with [`StatusError::ValidationError`].
pub fn parse_address(input: &str) -> StatusResult<AddressSpec> {
    if input.is_empty() {
        return Err(StatusError::ValidationError(
            "Server address is required".to_string(),
        ));
    }

    let caps = ADDRESS_PATTERN
        .captures(input)
        .ok_or_else(|| StatusError::ValidationError(format!("Invalid server address: {input}")))?;

    let host = caps
        .name("host")
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| StatusError::ValidationError(format!("Missing host: {input}")))?;

    // At most five ASCII digits, so this always fits in a u32.
    let port = caps
        .name("port")
        .map(|m| {
            m.as_str()
                .parse::<u32>()
                .map_err(|e| StatusError::ValidationError(format!("Invalid port: {e}")))
        })
        .transpose()?;

    Ok(AddressSpec { host, port })
}
