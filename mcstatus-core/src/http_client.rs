//! Shared HTTP request handling
//!
//! Both remote sources (status API and protocol metadata) go through the same
//! flow: send, log, read status/headers/body. Interpreting the result is left
//! to the caller.
//!
//! No retries: every failure is terminal for its request and needs a new user
//! action to recover.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{StatusError, StatusResult, DEFAULT_FAILURE_MESSAGE};
use crate::types::CacheStatus;
use crate::utils::log_sanitizer::truncate_for_log;

/// Explicit cache-hit flag.
const HEADER_CACHE_HIT: &str = "x-cache-hit";
/// Seconds left before the cached status expires; present only on cache hits.
const HEADER_CACHE_REMAINING: &str = "x-cache-time-remaining";

/// Raw response of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub cache: CacheStatus,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status, cache signal and body text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `source` - remote name, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` for any HTTP status, including non-2xx
    /// * `Err(StatusError::NetworkError)` when no complete response arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source: &str,
        url: &str,
    ) -> StatusResult<HttpResponse> {
        log::debug!("[{source}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            log::debug!("[{source}] Request failed: {e}");
            StatusError::NetworkError(e.to_string())
        })?;

        let status = response.status().as_u16();
        log::debug!("[{source}] Response Status: {status}");

        // Headers must be read before the body consumes the response
        let cache = cache_status(response.headers());

        let body = response.text().await.map_err(|e| {
            StatusError::NetworkError(format!("Failed to read response body: {e}"))
        })?;

        log::debug!("[{source}] Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse {
            status,
            cache,
            body,
        })
    }

    /// Parse a JSON response body
    pub fn parse_json<T>(response_text: &str, source: &str) -> StatusResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source}] JSON parse failed: {e}");
            log::error!("[{source}] Raw response: {}", truncate_for_log(response_text));
            StatusError::ParseError(e.to_string())
        })
    }
}

/// Derive the cache signal from response headers.
///
/// `x-cache-hit` wins when present. Otherwise the presence of
/// `x-cache-time-remaining` means the answer came from cache, and its value
/// (whole seconds) is the remaining lifetime.
pub(crate) fn cache_status(headers: &HeaderMap) -> CacheStatus {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let remaining = header(HEADER_CACHE_REMAINING)
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs);

    let hit = match header(HEADER_CACHE_HIT) {
        Some(v) => v.eq_ignore_ascii_case("true") || v == "1",
        None => header(HEADER_CACHE_REMAINING).is_some(),
    };

    CacheStatus { hit, remaining }
}

/// Turn a non-200 body into a displayable message.
///
/// Plain text is used as-is. A JSON body shaped like `{"errors": ["…"]}`
/// contributes its first entry. Empty bodies get the default message.
pub(crate) fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return DEFAULT_FAILURE_MESSAGE.to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(first) = value
            .get("errors")
            .and_then(|e| e.get(0))
            .and_then(serde_json::Value::as_str)
        {
            return first.to_string();
        }
        if let Some(s) = value.as_str() {
            return s.to_string();
        }
    }

    trimmed.to_string()
}
