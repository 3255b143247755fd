//! Finished background lookups

use mcstatus_core::{LookupReport, LookupResult, RequestToken};

use crate::model::App;

pub fn finish(app: &mut App, token: RequestToken, report: LookupReport) {
    let LookupReport {
        outcome,
        protocol_versions,
    } = report;

    if !app.status.lookup.resolve(token, outcome) {
        tracing::debug!("Ignoring report of superseded lookup #{}", token.value());
        return;
    }
    app.status.protocol_versions = protocol_versions;

    let message = match app.status.result() {
        Some(LookupResult::Failure { message }) => format!("Lookup failed: {message}"),
        Some(LookupResult::Success(_)) => match app.status.displayed_request() {
            Some(request) => format!("Retrieved status of {}", request.address()),
            None => "Retrieved status".to_string(),
        },
        _ => return,
    };
    tracing::info!("Lookup #{} finished: {message}", token.value());
    app.set_status(message);
}
