//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{catalog, grid, keys::handle_key, search, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Load Messages
        // ─────────────────────────────────────────────────────────
        Message::Mount => catalog::handle_mount(state),
        Message::CatalogLoaded { generation, beers } => {
            catalog::handle_catalog_loaded(state, generation, beers)
        }
        Message::CatalogLoadFailed { generation, error } => {
            catalog::handle_catalog_load_failed(state, generation, error)
        }
        Message::ImageLoadFailed { generation, id } => {
            catalog::handle_image_load_failed(state, generation, id)
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { text } => search::handle_search_input(state, text),
        Message::ClearSearch => search::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // Grid Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(nav) => grid::handle_navigate(state, nav),
        Message::OpenDetails => grid::handle_open_details(state),
        Message::CloseDetails => grid::handle_close_details(state),
    }
}
