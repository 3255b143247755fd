//! # mcstatus-core
//!
//! Client-side building blocks of a Minecraft server status lookup.
//!
//! The actual server-ping protocol and result caching live in the public
//! status API (`https://api.mcstatus.io/v2`); this crate only talks to it over
//! HTTP. What it owns is:
//!
//! - **Address validation**: [`validate_address`] / [`parse_address`] gate
//!   user input before anything touches the network.
//! - **Status retrieval**: [`StatusClient`] implements [`StatusApi`] on top of
//!   `reqwest`, including the best-effort protocol-version metadata fetch.
//! - **Lookup state machine**: [`LookupMachine`] tracks one lookup from
//!   `Pending` to `Success`/`Failure` and drops results of superseded requests.
//! - **Site helpers**: canonical URLs, the sitemap listing and FAQ content.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mcstatus_core::{
//!     perform_lookup, ClientConfig, Edition, LookupMachine, LookupRequest, StatusClient,
//! };
//!
//! # async fn demo() -> mcstatus_core::StatusResult<()> {
//! let client = StatusClient::new(ClientConfig::default())?;
//! let request = LookupRequest::new(Edition::Java, "play.hypixel.net")?;
//!
//! let mut machine = LookupMachine::new();
//! let token = machine.submit(request.clone());
//! let report = perform_lookup(&client, &request).await;
//! machine.resolve(token, report.outcome);
//!
//! println!("{:?}", machine.result());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`StatusResult`]. Invalid input surfaces as
//! [`StatusError::ValidationError`] and never reaches the network; everything
//! else is a retrieval error that ends up as a `Failure` message via
//! [`StatusError::failure_message`]. Nothing is retried.

mod address;
mod client;
mod config;
mod error;
mod http_client;
mod lookup;
mod protocol;
mod site;
mod types;
mod utils;

pub use address::{parse_address, validate_address, Validation};
pub use client::{StatusApi, StatusClient};
pub use config::{
    ClientConfig, DEFAULT_API_HOST, DEFAULT_PROTOCOL_DATA_HOST, ENV_API_HOST,
    ENV_PROTOCOL_DATA_HOST,
};
pub use error::{StatusError, StatusResult, DEFAULT_FAILURE_MESSAGE};
pub use lookup::{
    perform_lookup, LookupEvent, LookupMachine, LookupReport, LookupResult, LookupState,
    RequestToken,
};
pub use protocol::{protocol_name, ProtocolVersion};
pub use site::{
    canonical_url, example_servers, faq_entries, humanize_duration, humanize_seconds,
    render_sitemap, sitemap_entries, status_path, ExampleServer, FaqEntry, SITE_BASE_URL,
};
pub use types::{
    AddressSpec, CacheStatus, Edition, LookupRequest, ModInfo, StatusResponse, StatusSummary,
};
pub use utils::log_sanitizer;
