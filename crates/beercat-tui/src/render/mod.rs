//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use beercat_app::state::{AppState, UiMode};
use beercat_core::{BeerCard, CatalogView};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the grid state, which records the rendered layout.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let details_open = state.ui_mode == UiMode::Details;

    frame.render_widget(widgets::CatalogHeader::new(), areas.header);
    frame.render_widget(
        widgets::SearchInput::new(state.catalog.search()).focused(!details_open),
        areas.search,
    );

    let summary = state.result_summary();
    frame.render_widget(
        widgets::Footer::new(summary.as_deref()).details_open(details_open),
        areas.footer,
    );

    // Cards borrow the catalog while the grid state is written back
    let placeholder = state.settings.ui.placeholder_image.as_str();
    match state.catalog.view() {
        CatalogView::Loading => {
            frame.render_widget(
                widgets::LoadingIndicator::new(state.spinner_frame),
                areas.content,
            );
        }
        CatalogView::Empty => {
            let message = state.empty_message();
            let is_error = state.settings.ui.show_load_errors && state.load_error.is_some();
            frame.render_widget(
                widgets::EmptyState::new(&message).error(is_error),
                areas.content,
            );
        }
        CatalogView::Populated(beers) => {
            let cards: Vec<BeerCard<'_>> = beers
                .iter()
                .map(|beer| {
                    let failed = state.image_fallbacks.contains(&beer.id);
                    BeerCard::new(beer, failed, placeholder)
                })
                .collect();
            frame.render_stateful_widget(
                widgets::CatalogGrid::new(&cards),
                areas.content,
                &mut state.grid,
            );

            if details_open {
                if let Some(card) = cards.get(state.grid.selected) {
                    frame.render_widget(widgets::DetailsPopup::new(card), area);
                }
            }
        }
    }
}
