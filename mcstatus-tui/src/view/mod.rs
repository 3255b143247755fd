//! View layer: pure rendering of the model.
//!
//! `render` reads `&App` and draws a title bar with page tabs, the current
//! page and the status bar. Nothing here mutates state.

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
