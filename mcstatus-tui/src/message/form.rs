//! Address form messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// Type a character into the address field
    Input(char),
    Backspace,
    /// Empty the address field
    Clear,
    NextField,
    PrevField,
    /// Flip between Java and Bedrock
    ToggleEdition,
    /// Fill the form with the next example server
    NextExample,
    /// Submit; ignored while the address is invalid
    Submit,
}
