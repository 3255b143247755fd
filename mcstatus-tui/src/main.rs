//! mcstatus TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: config loading and lookups on the tokio runtime (`backend/`)
//!
//! ```text
//! main()
//!     init_logging()          file-backed tracing subscriber
//!     load_client_config()    defaults -> config.json -> environment
//!     Runtime::new()          owns every network task
//!     init_terminal()
//!     app::run()              draw -> drain backend -> poll input -> update
//!     restore_terminal()      always, even when run() failed
//! ```

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use mcstatus_core::StatusClient;
use tokio::sync::mpsc;

use backend::{load_client_config, LookupService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Logging goes to a file; stdout belongs to the terminal UI
    let log_path = init_logging()?;
    tracing::info!("mcstatus TUI starting, logging to {}", log_path.display());

    // 2. Client configuration
    let config = load_client_config()?;
    let api_host = config.api_host.clone();
    let protocol_data_host = config.protocol_data_host.clone();
    let client = StatusClient::new(config).context("Failed to create status client")?;

    // 3. Runtime and backend channel
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let (tx, rx) = mpsc::unbounded_channel();
    let lookups = LookupService::new(Arc::new(client), runtime.handle().clone(), tx);

    // 4. Terminal
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(api_host, protocol_data_host);

    // 5. Main loop
    let result = app::run(&mut terminal, &mut app, &lookups, rx);

    // 6. Restore the terminal whatever happened
    restore_terminal(&mut terminal)?;

    tracing::info!("mcstatus TUI exiting");
    result
}
