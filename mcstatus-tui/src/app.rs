//! Main loop.
//!
//! Each iteration takes about 100 ms (less when a key arrives):
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(app, f))     render
//!     if app.should_quit { break }
//!     while let Ok(msg) = backend.try_recv()      finished lookups
//!         dispatch(msg)
//!     if let Some(event) = poll_event(100ms)      user input
//!         dispatch(handle_event(event, app))
//! }
//! ```
//!
//! `dispatch` runs `update` and hands any returned command to the backend.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::LookupService;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    lookups: &LookupService,
    mut backend: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Quit?
        if app.should_quit {
            break;
        }

        // 3. Results posted by background lookups
        while let Ok(msg) = backend.try_recv() {
            dispatch(app, lookups, msg);
        }

        // 4. Input (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, lookups, msg);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, lookups: &LookupService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        match command {
            Command::Lookup { token, request } => lookups.dispatch(token, request),
        }
    }
}
