use mcstatus_core::{LookupRequest, RequestToken};

/// Side effect requested by the update layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the status for `request` and report back under `token`.
    Lookup {
        token: RequestToken,
        request: LookupRequest,
    },
}
