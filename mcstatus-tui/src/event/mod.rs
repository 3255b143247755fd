//! Event layer: turns terminal input into messages.
//!
//! `poll_event` blocks for at most the given timeout; `handle_event` maps a
//! key press to an [`AppMessage`](crate::message::AppMessage):
//!
//! - global keys first (quit, page switching, clear status)
//! - then keys of the current page; on the Status page the focused form
//!   control decides whether plain characters are text input
//!
//! Only `Press` events are handled; Windows terminals also report releases.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
