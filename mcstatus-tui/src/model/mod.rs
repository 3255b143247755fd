//! Model layer: the single source of truth for what the UI shows.
//!
//! Plain data plus small helpers; all mutation goes through the update layer.
//!
//! - [`App`]: top-level state, current [`Page`] and status bar message
//! - [`FormField`]: which control of the address form has focus
//! - `state/`: per-page data. The Status page owns the lookup machine, the
//!   About page owns the accordion selection.
//!
//! `Page` says which page is on screen; `state` holds what is on it.

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FormField;
pub use page::Page;
pub use state::{AboutState, StatusState};
