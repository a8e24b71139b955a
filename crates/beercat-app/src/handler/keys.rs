//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{GridNav, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Details => handle_key_details(key),
    }
}

/// Handle key events while browsing.
///
/// The search box always has focus: printable characters edit it, while
/// navigation keys move the card selection.
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    let search = state.catalog.search();

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Clear affordance, only meaningful when there is text
        InputKey::CharCtrl('u') => state
            .catalog
            .can_clear_search()
            .then_some(Message::ClearSearch),

        // Esc clears a non-empty search first, then quits
        InputKey::Esc => {
            if state.catalog.can_clear_search() {
                Some(Message::ClearSearch)
            } else {
                Some(Message::Quit)
            }
        }

        InputKey::Char(c) => {
            let mut text = search.to_string();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        InputKey::Backspace => {
            if search.is_empty() {
                None
            } else {
                let mut text = search.to_string();
                text.pop();
                Some(Message::SearchInput { text })
            }
        }

        InputKey::Enter => Some(Message::OpenDetails),

        InputKey::Up => Some(Message::Navigate(GridNav::Up)),
        InputKey::Down => Some(Message::Navigate(GridNav::Down)),
        InputKey::Left | InputKey::BackTab => Some(Message::Navigate(GridNav::Left)),
        InputKey::Right | InputKey::Tab => Some(Message::Navigate(GridNav::Right)),
        InputKey::PageUp => Some(Message::Navigate(GridNav::PageUp)),
        InputKey::PageDown => Some(Message::Navigate(GridNav::PageDown)),
        InputKey::Home => Some(Message::Navigate(GridNav::First)),
        InputKey::End => Some(Message::Navigate(GridNav::Last)),

        _ => None,
    }
}

/// Handle key events in the details overlay
fn handle_key_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseDetails),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
