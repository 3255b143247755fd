//! Status lookup state machine.
//!
//! ```text
//!            Submit                 Resolved(token == current)
//!   Idle ───────────▶ Pending ─────────────────────────────▶ Success | Failure
//!    ▲                  ▲  │                                        │
//!    │      Reset       │  └──────────── Submit (hard reset) ◀──────┘
//!    └──────────────────┴─────────────────────────────────────────────
//! ```
//!
//! Every submission gets a fresh [`RequestToken`]. Resolutions carrying any
//! other token are stale (a superseded request finishing late) and are
//! dropped, so displayed state always belongs to the latest submission.

use serde::Serialize;

use crate::client::StatusApi;
use crate::error::StatusResult;
use crate::protocol::ProtocolVersion;
use crate::types::{CacheStatus, LookupRequest, StatusResponse};

/// Identifies one submission. Issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result slot of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LookupResult {
    /// Request in flight, nothing to show yet.
    Pending,
    /// 200 response: parsed body plus cache signal.
    Success(StatusResponse),
    /// Non-200 body, transport error or unparsable body.
    Failure { message: String },
}

impl LookupResult {
    /// Map a fetch outcome to its terminal result.
    pub fn from_outcome(outcome: StatusResult<StatusResponse>) -> Self {
        match outcome {
            Ok(response) => Self::Success(response),
            Err(e) => Self::Failure {
                message: e.failure_message(),
            },
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Parsed body, on success.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(response) => Some(&response.payload),
            _ => None,
        }
    }

    /// Cache signal, on success.
    pub fn cache(&self) -> Option<CacheStatus> {
        match self {
            Self::Success(response) => Some(response.cache),
            _ => None,
        }
    }

    pub fn cache_hit(&self) -> Option<bool> {
        self.cache().map(|c| c.hit)
    }

    /// Error text, on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }
}

/// Inputs of the state machine.
#[derive(Debug, Clone)]
pub enum LookupEvent {
    /// A validated submission; discards whatever was shown or in flight.
    Submit {
        token: RequestToken,
        request: LookupRequest,
    },
    /// A fetch finished.
    Resolved {
        token: RequestToken,
        outcome: StatusResult<StatusResponse>,
    },
    /// Back to the empty form.
    Reset,
}

/// State of the lookup currently on display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A submission exists; `result` starts as `Pending` and is set once.
    Active {
        token: RequestToken,
        request: LookupRequest,
        result: LookupResult,
    },
}

impl LookupState {
    /// Whether `event` changes this state.
    ///
    /// `Resolved` only applies to the pending submission with the same token;
    /// a result is never overwritten once set.
    pub fn accepts(&self, event: &LookupEvent) -> bool {
        match (self, event) {
            (_, LookupEvent::Submit { .. } | LookupEvent::Reset) => true,
            (
                Self::Active {
                    token: current,
                    result: LookupResult::Pending,
                    ..
                },
                LookupEvent::Resolved { token, .. },
            ) => current == token,
            (_, LookupEvent::Resolved { .. }) => false,
        }
    }

    /// Apply one event. Events that are not accepted leave the state untouched.
    #[must_use]
    pub fn transition(self, event: LookupEvent) -> Self {
        if !self.accepts(&event) {
            return self;
        }

        match event {
            LookupEvent::Submit { token, request } => Self::Active {
                token,
                request,
                result: LookupResult::Pending,
            },
            LookupEvent::Resolved { outcome, .. } => match self {
                Self::Active { token, request, .. } => Self::Active {
                    token,
                    request,
                    result: LookupResult::from_outcome(outcome),
                },
                Self::Idle => Self::Idle,
            },
            LookupEvent::Reset => Self::Idle,
        }
    }

    pub fn request(&self) -> Option<&LookupRequest> {
        match self {
            Self::Active { request, .. } => Some(request),
            Self::Idle => None,
        }
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            Self::Active { result, .. } => Some(result),
            Self::Idle => None,
        }
    }

    pub fn token(&self) -> Option<RequestToken> {
        match self {
            Self::Active { token, .. } => Some(*token),
            Self::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.result().is_some_and(LookupResult::is_pending)
    }

    /// Short name of the current phase, for logs.
    pub fn phase(&self) -> &'static str {
        match self.result() {
            None => "idle",
            Some(LookupResult::Pending) => "pending",
            Some(LookupResult::Success(_)) => "success",
            Some(LookupResult::Failure { .. }) => "failure",
        }
    }
}

/// Owns the lookup state and the token counter.
#[derive(Debug, Default)]
pub struct LookupMachine {
    state: LookupState,
    last_token: u64,
}

impl LookupMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Pending` for `request` and return its token.
    pub fn submit(&mut self, request: LookupRequest) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        log::debug!("Lookup #{} submitted: {request}", token.0);
        self.apply(LookupEvent::Submit { token, request });
        token
    }

    /// Deliver a fetch outcome. Returns `false` when the token is stale or the
    /// lookup already resolved, in which case nothing changes.
    pub fn resolve(&mut self, token: RequestToken, outcome: StatusResult<StatusResponse>) -> bool {
        let applied = self.apply(LookupEvent::Resolved { token, outcome });
        if applied {
            log::debug!("Lookup #{} resolved: {}", token.0, self.state.phase());
        } else {
            log::debug!("Lookup #{} discarded as stale", token.0);
        }
        applied
    }

    /// Back to `Idle`. Any in-flight fetch becomes stale.
    pub fn reset(&mut self) {
        self.apply(LookupEvent::Reset);
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.state.result()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Whether `token` belongs to the submission on display.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.state.token() == Some(token)
    }

    fn apply(&mut self, event: LookupEvent) -> bool {
        if !self.state.accepts(&event) {
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event);
        true
    }
}

/// Everything one lookup produced.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// Primary status fetch.
    pub outcome: StatusResult<StatusResponse>,
    /// Protocol-version table; `None` when that best-effort fetch failed.
    pub protocol_versions: Option<Vec<ProtocolVersion>>,
}

/// Run the status fetch and the protocol-version fetch concurrently.
///
/// The secondary fetch never influences `outcome`; its failure is logged and
/// reported as `None`.
pub async fn perform_lookup<A>(api: &A, request: &LookupRequest) -> LookupReport
where
    A: StatusApi + ?Sized,
{
    let (outcome, versions) = futures::join!(
        api.fetch_status(request),
        api.fetch_protocol_versions(request.edition())
    );

    let protocol_versions = match versions {
        Ok(versions) => Some(versions),
        Err(e) => {
            log::warn!(
                "Failed to fetch {} protocol versions: {e}",
                request.edition()
            );
            None
        }
    };

    if let Err(e) = &outcome {
        log::info!("Status lookup for {request} failed: {e}");
    }

    LookupReport {
        outcome,
        protocol_versions,
    }
}
