//! Message layer: the bridge between Event and Update.
//!
//! Key presses (and finished background lookups) are translated into
//! [`AppMessage`] values; `update::update` is the only consumer. Page-specific
//! messages are split into sub-enums:
//!
//! - [`FormMessage`]: the address form on the Status page
//! - [`ResultMessage`]: display toggles of the result table
//! - [`FaqMessage`]: the About page accordion
//!
//! Update may answer with a [`Command`], a side effect the main loop hands to
//! the backend.

mod app;
mod command;
mod content;
mod form;

pub use app::AppMessage;
pub use command::Command;
pub use content::{FaqMessage, ResultMessage};
pub use form::FormMessage;
