//! Background status lookups

use std::sync::Arc;

use mcstatus_core::{perform_lookup, LookupRequest, RequestToken, StatusApi};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;

/// Runs lookups on the runtime and reports back over the UI channel.
///
/// Superseded lookups are not cancelled; they finish and their report is
/// dropped by the lookup machine's token check.
pub struct LookupService {
    api: Arc<dyn StatusApi>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl LookupService {
    pub fn new(api: Arc<dyn StatusApi>, runtime: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self { api, runtime, tx }
    }

    /// Start a lookup for `request`; its report arrives as `LookupFinished`.
    pub fn dispatch(&self, token: RequestToken, request: LookupRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tracing::debug!("Dispatching lookup #{} for {request}", token.value());
        self.runtime.spawn(async move {
            let report = perform_lookup(api.as_ref(), &request).await;
            if tx.send(AppMessage::LookupFinished { token, report }).is_err() {
                tracing::debug!("UI gone, dropping report of lookup #{}", token.value());
            }
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mcstatus_core::{
        CacheStatus, Edition, LookupMachine, ProtocolVersion, StatusError, StatusResponse,
        StatusResult,
    };
    use tokio::sync::mpsc;

    struct EchoApi;

    #[async_trait]
    impl StatusApi for EchoApi {
        async fn fetch_status(&self, request: &LookupRequest) -> StatusResult<StatusResponse> {
            if request.address().starts_with("down.") {
                return Err(StatusError::NetworkError("network error".into()));
            }
            Ok(StatusResponse {
                payload: serde_json::json!({ "online": true, "host": request.address() }),
                cache: CacheStatus::default(),
            })
        }

        async fn fetch_protocol_versions(
            &self,
            _edition: Edition,
        ) -> StatusResult<Vec<ProtocolVersion>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn report_comes_back_tagged_with_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = LookupService::new(Arc::new(EchoApi), Handle::current(), tx);

        let mut machine = LookupMachine::new();
        let request = LookupRequest::new(Edition::Java, "play.hypixel.net").unwrap();
        let token = machine.submit(request.clone());
        service.dispatch(token, request);

        let Some(AppMessage::LookupFinished { token: got, report }) = rx.recv().await else {
            panic!("expected a lookup report");
        };
        assert_eq!(got, token);
        assert!(machine.resolve(got, report.outcome));
        assert_eq!(report.protocol_versions, Some(Vec::new()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failure_is_reported_not_swallowed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = LookupService::new(Arc::new(EchoApi), Handle::current(), tx);

        let mut machine = LookupMachine::new();
        let request = LookupRequest::new(Edition::Bedrock, "down.example.com").unwrap();
        let token = machine.submit(request.clone());
        service.dispatch(token, request);

        let Some(AppMessage::LookupFinished { token, report }) = rx.recv().await else {
            panic!("expected a lookup report");
        };
        machine.resolve(token, report.outcome);
        assert_eq!(
            machine.result().and_then(|r| r.error()),
            Some("network error")
        );
    }
}
