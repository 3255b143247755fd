//! Backend layer: everything that leaves the process.
//!
//! The UI never awaits. It hands a request to [`LookupService`], which runs
//! `perform_lookup` on the tokio runtime and posts the report back to the main
//! loop as an `AppMessage::LookupFinished` tagged with the request token.
//!
//! ```text
//! update() ──Command::Lookup──▶ LookupService::dispatch ──spawn──▶ perform_lookup
//!     ▲                                                               │
//!     └──────────── mpsc (drained every tick by app::run) ◀───────────┘
//! ```

mod config_service;
mod lookup_service;

pub use config_service::load_client_config;
pub use lookup_service::LookupService;
