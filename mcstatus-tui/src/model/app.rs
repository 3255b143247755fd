use super::{AboutState, Page, StatusState};

pub struct App {
    pub should_quit: bool,

    pub current_page: Page,

    /// Status bar message
    pub status_message: Option<String>,

    /// Base URL of the status API, shown in the API usage panel and docs
    pub api_host: String,
    /// Base URL of the protocol version tables, shown in docs
    pub protocol_data_host: String,

    // === Page state ===
    pub status: StatusState,
    pub about: AboutState,
}

impl App {
    pub fn new(api_host: impl Into<String>, protocol_data_host: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            current_page: Page::Status,
            status_message: None,
            api_host: api_host.into(),
            protocol_data_host: protocol_data_host.into(),
            status: StatusState::new(),
            about: AboutState::new(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(
            mcstatus_core::DEFAULT_API_HOST,
            mcstatus_core::DEFAULT_PROTOCOL_DATA_HOST,
        )
    }
}
