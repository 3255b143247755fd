//! Page content messages

/// Result table toggles (Status page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMessage {
    ToggleDebug,
    TogglePlayers,
    ToggleMods,
    ToggleApiUsage,
}

/// FAQ accordion (About page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqMessage {
    SelectPrevious,
    SelectNext,
    /// Expand the selected entry, or collapse it when already open
    Toggle,
}
