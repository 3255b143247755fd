//! Per-page state

mod about;
mod form;
mod status;

pub use about::AboutState;
pub use form::FormState;
pub use status::StatusState;
