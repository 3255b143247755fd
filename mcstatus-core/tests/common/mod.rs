//! Shared test helpers: assertion macros, a scripted `StatusApi` and a tiny
//! local HTTP responder.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mcstatus_core::{
    ClientConfig, Edition, LookupRequest, ProtocolVersion, StatusApi, StatusClient, StatusError,
    StatusResponse, StatusResult,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Assert a `Result` is `Ok` and unwrap it (ends the test on failure).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert an `Option` is `Some` and unwrap it (ends the test on failure).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

pub fn java(address: &str) -> LookupRequest {
    LookupRequest::new(Edition::Java, address).unwrap_or_else(|e| panic!("bad test address: {e}"))
}

/// `StatusApi` returning scripted outcomes and counting calls.
#[derive(Default)]
pub struct MockApi {
    pub status: Mutex<HashMap<String, StatusResult<StatusResponse>>>,
    pub versions: Mutex<Option<StatusResult<Vec<ProtocolVersion>>>>,
    pub status_calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_status(&self, address: &str, outcome: StatusResult<StatusResponse>) {
        if let Ok(mut map) = self.status.lock() {
            map.insert(address.to_string(), outcome);
        }
    }

    pub fn on_versions(&self, outcome: StatusResult<Vec<ProtocolVersion>>) {
        if let Ok(mut slot) = self.versions.lock() {
            *slot = Some(outcome);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.status_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl StatusApi for MockApi {
    async fn fetch_status(&self, request: &LookupRequest) -> StatusResult<StatusResponse> {
        if let Ok(mut calls) = self.status_calls.lock() {
            calls.push(request.address().to_string());
        }
        self.status
            .lock()
            .ok()
            .and_then(|map| map.get(request.address()).cloned())
            .unwrap_or_else(|| Err(StatusError::NetworkError("no scripted response".into())))
    }

    async fn fetch_protocol_versions(
        &self,
        _edition: Edition,
    ) -> StatusResult<Vec<ProtocolVersion>> {
        self.versions
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Canned HTTP answer for one path.
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Route {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// Serve `routes` on an ephemeral local port until the test ends.
///
/// Unknown paths get a 404 with an empty body.
pub async fn serve(routes: Vec<(&'static str, Route)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("bind failed: {e}"));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("local_addr failed: {e}"));
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0_u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf);
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let route = routes
                    .get(path.as_str())
                    .cloned()
                    .unwrap_or_else(|| Route::new(404, ""));

                let mut response = format!(
                    "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n",
                    route.status,
                    route.body.len()
                );
                for (name, value) in &route.headers {
                    response.push_str(&format!("{name}: {value}\r\n"));
                }
                response.push_str("\r\n");
                response.push_str(&route.body);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Client whose API and protocol hosts both point at `addr`.
///
/// Proxies are disabled so a proxy configured in the environment cannot
/// intercept loopback traffic.
pub fn local_client(addr: SocketAddr) -> StatusClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap_or_else(|e| panic!("reqwest client failed: {e}"));
    StatusClient::with_client(
        ClientConfig {
            api_host: format!("http://{addr}/v2"),
            protocol_data_host: format!("http://{addr}/data"),
            ..ClientConfig::default()
        },
        http,
    )
    .unwrap_or_else(|e| panic!("client config rejected: {e}"))
}
