//! Status API client.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{StatusError, StatusResult};
use crate::http_client::{error_message, HttpUtils};
use crate::protocol::ProtocolVersion;
use crate::site::status_path;
use crate::types::{Edition, LookupRequest, StatusResponse};

const STATUS_SOURCE: &str = "status-api";
const PROTOCOL_SOURCE: &str = "protocol-data";

/// Remote operations a lookup needs.
///
/// [`StatusClient`] is the HTTP implementation; tests and front ends can
/// substitute their own.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch the status of one server.
    ///
    /// Non-200 answers are [`StatusError::HttpError`] carrying the body text.
    async fn fetch_status(&self, request: &LookupRequest) -> StatusResult<StatusResponse>;

    /// Fetch the protocol-version table of an edition.
    async fn fetch_protocol_versions(&self, edition: Edition)
        -> StatusResult<Vec<ProtocolVersion>>;
}

/// HTTP client for the status API and the protocol-version metadata source.
#[derive(Debug, Clone)]
pub struct StatusClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl StatusClient {
    /// Build a client. The configuration is validated first.
    pub fn new(config: ClientConfig) -> StatusResult<Self> {
        let config = config.validated()?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| StatusError::ConfigError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Build a client around a preconfigured `reqwest::Client` (proxy, TLS, timeouts).
    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> StatusResult<Self> {
        Ok(Self {
            config: config.validated()?,
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{api_host}/status/{edition}/{address}`
    pub fn status_url(&self, request: &LookupRequest) -> String {
        format!("{}{}", self.config.api_host, status_path(request))
    }

    /// `{protocol_data_host}/{pc|bedrock}/common/protocolVersions.json`
    pub fn protocol_versions_url(&self, edition: Edition) -> String {
        format!(
            "{}/{}/common/protocolVersions.json",
            self.config.protocol_data_host,
            edition.protocol_data_segment()
        )
    }
}

#[async_trait]
impl StatusApi for StatusClient {
    async fn fetch_status(&self, request: &LookupRequest) -> StatusResult<StatusResponse> {
        let url = self.status_url(request);
        let response =
            HttpUtils::execute_request(self.client.get(&url), STATUS_SOURCE, &url).await?;

        if !response.is_ok() {
            let message = error_message(&response.body);
            log::debug!(
                "[{STATUS_SOURCE}] {request} failed with HTTP {}: {message}",
                response.status
            );
            return Err(StatusError::HttpError {
                status: response.status,
                message,
            });
        }

        let payload: serde_json::Value = HttpUtils::parse_json(&response.body, STATUS_SOURCE)?;
        log::debug!(
            "[{STATUS_SOURCE}] {request} resolved (cache hit: {})",
            response.cache.hit
        );

        Ok(StatusResponse {
            payload,
            cache: response.cache,
        })
    }

    async fn fetch_protocol_versions(
        &self,
        edition: Edition,
    ) -> StatusResult<Vec<ProtocolVersion>> {
        let url = self.protocol_versions_url(edition);
        let response =
            HttpUtils::execute_request(self.client.get(&url), PROTOCOL_SOURCE, &url).await?;

        if !response.is_ok() {
            return Err(StatusError::HttpError {
                status: response.status,
                message: format!("HTTP {} from protocol metadata source", response.status),
            });
        }

        HttpUtils::parse_json(&response.body, PROTOCOL_SOURCE)
    }
}
