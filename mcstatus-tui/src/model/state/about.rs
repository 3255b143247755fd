//! About page state: FAQ accordion

use mcstatus_core::faq_entries;

/// At most one entry is expanded at a time.
#[derive(Debug, Clone, Default)]
pub struct AboutState {
    pub selected: usize,
    pub expanded: Option<usize>,
}

impl AboutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = faq_entries().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Open the selected entry (closing any other), or close it if open.
    pub fn toggle_selected(&mut self) {
        self.expanded = if self.expanded == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_entry_open_at_a_time() {
        let mut about = AboutState::new();
        about.toggle_selected();
        assert!(about.is_expanded(0));

        about.select_next();
        about.toggle_selected();
        assert!(about.is_expanded(1));
        assert!(!about.is_expanded(0));

        about.toggle_selected();
        assert_eq!(about.expanded, None);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut about = AboutState::new();
        about.select_previous();
        assert_eq!(about.selected, 0);

        for _ in 0..100 {
            about.select_next();
        }
        assert_eq!(about.selected, faq_entries().len() - 1);
    }
}
