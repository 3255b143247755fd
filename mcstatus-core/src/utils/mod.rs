//! Utility modules.

/// Log sanitization so status bodies (with their inline icons) stay readable in logs.
pub mod log_sanitizer;
