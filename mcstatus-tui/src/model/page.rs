//! Page routing

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Address form and lookup result
    #[default]
    Status,
    /// FAQ
    About,
    /// API endpoints and sitemap
    Docs,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Status, Page::About, Page::Docs];

    pub fn title(self) -> &'static str {
        match self {
            Page::Status => "Status",
            Page::About => "About",
            Page::Docs => "Docs",
        }
    }

    fn index(self) -> usize {
        match self {
            Page::Status => 0,
            Page::About => 1,
            Page::Docs => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Page::Docs.next(), Page::Status);
        assert_eq!(Page::Status.previous(), Page::Docs);
        assert_eq!(Page::Status.next().next(), Page::Docs);
    }
}
