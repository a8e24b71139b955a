//! Card grid selection and details overlay handlers

use crate::message::GridNav;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_navigate(state: &mut AppState, nav: GridNav) -> UpdateResult {
    if state.is_loading() {
        return UpdateResult::none();
    }
    let len = state.filtered_len();
    state.grid.navigate(nav, len);
    UpdateResult::none()
}

/// Open the details overlay if a card is selected
pub fn handle_open_details(state: &mut AppState) -> UpdateResult {
    if state.selected_beer().is_some() {
        state.ui_mode = UiMode::Details;
    }
    UpdateResult::none()
}

pub fn handle_close_details(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}
