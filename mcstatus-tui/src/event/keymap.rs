//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Pages
    pub const PAGE_STATUS: KeyBinding = KeyBinding::alt(KeyCode::Char('1'));
    pub const PAGE_ABOUT: KeyBinding = KeyBinding::alt(KeyCode::Char('2'));
    pub const PAGE_DOCS: KeyBinding = KeyBinding::alt(KeyCode::Char('3'));
    pub const PAGE_NEXT: KeyBinding = KeyBinding::alt(KeyCode::Right);
    pub const PAGE_PREV: KeyBinding = KeyBinding::alt(KeyCode::Left);

    // Form
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const TOGGLE_EDITION: KeyBinding = KeyBinding::alt(KeyCode::Char('b'));
    pub const NEXT_EXAMPLE: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    // Result toggles
    pub const TOGGLE_DEBUG: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const TOGGLE_PLAYERS: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const TOGGLE_MODS: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));
    pub const TOGGLE_API_USAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));
}
