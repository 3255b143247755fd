//! Form focus

/// Focusable controls of the address form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Address,
    Bedrock,
    Submit,
}

impl FormField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Address => FormField::Bedrock,
            FormField::Bedrock => FormField::Submit,
            FormField::Submit => FormField::Address,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            FormField::Address => FormField::Submit,
            FormField::Bedrock => FormField::Address,
            FormField::Submit => FormField::Bedrock,
        }
    }
}
