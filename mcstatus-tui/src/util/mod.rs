//! Util layer: infrastructure with no lookup logic.
//!
//! - `terminal`: raw mode + alternate screen setup and teardown. Teardown must
//!   run even when the main loop fails, otherwise the shell is left in raw mode.
//! - `logging`: file-backed `tracing` subscriber. Stdout is owned by the UI, so
//!   nothing may log to it.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
