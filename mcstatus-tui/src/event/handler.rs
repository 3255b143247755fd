//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FaqMessage, FormMessage, ResultMessage};
use crate::model::{App, FormField, Page};

pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize needs no message; the next draw picks up the new size
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if let Some(msg) = page_switch(&key) {
        return msg;
    }

    match app.current_page {
        Page::Status => handle_status_keys(key, app),
        Page::About => handle_about_keys(key),
        Page::Docs => AppMessage::Noop,
    }
}

fn page_switch(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::PAGE_STATUS.matches(key) {
        AppMessage::SwitchPage(Page::Status)
    } else if DefaultKeymap::PAGE_ABOUT.matches(key) {
        AppMessage::SwitchPage(Page::About)
    } else if DefaultKeymap::PAGE_DOCS.matches(key) {
        AppMessage::SwitchPage(Page::Docs)
    } else if DefaultKeymap::PAGE_NEXT.matches(key) {
        AppMessage::NextPage
    } else if DefaultKeymap::PAGE_PREV.matches(key) {
        AppMessage::PrevPage
    } else {
        return None;
    };
    Some(msg)
}

fn handle_status_keys(key: KeyEvent, app: &App) -> AppMessage {
    let form = AppMessage::Form;
    let result = AppMessage::Result;

    // Shortcuts that work whatever control has focus
    if DefaultKeymap::SUBMIT.matches(&key) {
        return form(FormMessage::Submit);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return form(FormMessage::NextField);
    }
    if key.code == KeyCode::BackTab {
        return form(FormMessage::PrevField);
    }
    if DefaultKeymap::TOGGLE_EDITION.matches(&key) {
        return form(FormMessage::ToggleEdition);
    }
    if DefaultKeymap::NEXT_EXAMPLE.matches(&key) {
        return form(FormMessage::NextExample);
    }
    if DefaultKeymap::TOGGLE_DEBUG.matches(&key) {
        return result(ResultMessage::ToggleDebug);
    }
    if DefaultKeymap::TOGGLE_PLAYERS.matches(&key) {
        return result(ResultMessage::TogglePlayers);
    }
    if DefaultKeymap::TOGGLE_MODS.matches(&key) {
        return result(ResultMessage::ToggleMods);
    }
    if DefaultKeymap::TOGGLE_API_USAGE.matches(&key) {
        return result(ResultMessage::ToggleApiUsage);
    }

    match app.status.form.focus {
        FormField::Address => handle_address_input(key),
        FormField::Bedrock if key.code == KeyCode::Char(' ') => form(FormMessage::ToggleEdition),
        FormField::Submit if key.code == KeyCode::Char(' ') => form(FormMessage::Submit),
        FormField::Bedrock | FormField::Submit => AppMessage::Noop,
    }
}

fn handle_address_input(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Form(FormMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

fn handle_about_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Faq(FaqMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Faq(FaqMessage::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Faq(FaqMessage::Toggle),
        _ => AppMessage::Noop,
    }
}
