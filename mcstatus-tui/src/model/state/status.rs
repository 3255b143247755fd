//! Status page state

use mcstatus_core::{
    protocol_name, LookupMachine, LookupRequest, LookupResult, ProtocolVersion, StatusSummary,
};

use super::FormState;

#[derive(Debug, Default)]
pub struct StatusState {
    pub form: FormState,
    /// Lookup on display; drops reports of superseded submissions
    pub lookup: LookupMachine,
    /// Protocol table of the current lookup, when its fetch succeeded
    pub protocol_versions: Option<Vec<ProtocolVersion>>,

    pub show_debug: bool,
    pub show_players: bool,
    pub show_mods: bool,
    pub show_api_usage: bool,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request whose result is on display (not necessarily the form input).
    pub fn displayed_request(&self) -> Option<&LookupRequest> {
        self.lookup.state().request()
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.lookup.result()
    }

    /// Typed view of a successful payload.
    pub fn summary(&self) -> Option<StatusSummary> {
        self.result()
            .and_then(LookupResult::payload)
            .map(StatusSummary::from_payload)
    }

    /// Human-readable name of `protocol`, once the version table arrived.
    pub fn protocol_label(&self, protocol: i64) -> Option<String> {
        self.protocol_versions
            .as_deref()
            .and_then(|versions| protocol_name(versions, protocol))
    }

    /// Collapse the per-result lists. Called when a new lookup starts.
    pub fn reset_result_view(&mut self) {
        self.protocol_versions = None;
        self.show_players = false;
        self.show_mods = false;
    }
}
