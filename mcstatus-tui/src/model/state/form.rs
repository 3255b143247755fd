//! Address form state

use mcstatus_core::{example_servers, validate_address, Edition, LookupRequest, Validation};

use crate::model::FormField;

/// Free-form input as typed. Validation runs on every read and never
/// modifies the text.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub address: String,
    pub bedrock: bool,
    pub focus: FormField,
    /// Index of the last example loaded with `load_next_example`
    example_cursor: Option<usize>,
}

impl FormState {
    pub fn edition(&self) -> Edition {
        Edition::from_bedrock_flag(self.bedrock)
    }

    pub fn validation(&self) -> Validation {
        validate_address(&self.address)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.validation().valid
    }

    /// Request for the current input, or `None` while it is invalid.
    pub fn request(&self) -> Option<LookupRequest> {
        LookupRequest::new(self.edition(), &self.address).ok()
    }

    pub fn push_char(&mut self, c: char) {
        self.address.push(c);
    }

    pub fn backspace(&mut self) {
        self.address.pop();
    }

    pub fn clear(&mut self) {
        self.address.clear();
    }

    pub fn toggle_edition(&mut self) {
        self.bedrock = !self.bedrock;
    }

    /// Replace the input with the next example server, cycling through the list.
    pub fn load_next_example(&mut self) {
        let examples = example_servers();
        if examples.is_empty() {
            return;
        }
        let next = self.example_cursor.map_or(0, |i| (i + 1) % examples.len());
        let example = examples[next];
        self.example_cursor = Some(next);
        self.address = example.address.to_string();
        self.bedrock = example.edition == Edition::Bedrock;
    }
}
