//! Search input handlers

use crate::state::AppState;

use super::UpdateResult;

/// Replace the search text. Never triggers a load.
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    if state.catalog.search() == text {
        return UpdateResult::none();
    }
    state.catalog.set_search(text);
    state.grid.reset();
    UpdateResult::none()
}

/// Reset the search to empty (the clear affordance)
pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    if state.catalog.can_clear_search() {
        state.catalog.clear_search();
        state.grid.reset();
    }
    UpdateResult::none()
}
