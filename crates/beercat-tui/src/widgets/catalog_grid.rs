//! Responsive grid of beer cards

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};

use beercat_app::state::GridState;
use beercat_core::BeerCard;

use crate::layout::{card_cells, grid_columns, grid_rows, CARD_HEIGHT};

use super::BeerCardView;

/// Card grid in list order.
///
/// Rendering records the column and row counts in [`GridState`] so keyboard
/// navigation moves through the layout on screen.
pub struct CatalogGrid<'a> {
    cards: &'a [BeerCard<'a>],
}

impl<'a> CatalogGrid<'a> {
    pub fn new(cards: &'a [BeerCard<'a>]) -> Self {
        Self { cards }
    }
}

impl StatefulWidget for CatalogGrid<'_> {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut GridState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = grid_columns(area.width);
        let rows = grid_rows(area.height);
        state.set_layout(columns, rows);
        state.clamp(self.cards.len());

        let first = state.scroll_row * columns;
        for (row_idx, row_cards) in self.cards[first.min(self.cards.len())..]
            .chunks(columns)
            .take(rows)
            .enumerate()
        {
            let y = area.y + (row_idx as u16) * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            let row_area = Rect::new(area.x, y, area.width, height);

            for (col_idx, (card, cell)) in row_cards
                .iter()
                .zip(card_cells(row_area, columns))
                .enumerate()
            {
                let index = first + row_idx * columns + col_idx;
                BeerCardView::new(card)
                    .selected(index == state.selected)
                    .render(cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use beercat_core::BeerRecord;

    fn beers(n: u64) -> Vec<BeerRecord> {
        (1..=n)
            .map(|i| BeerRecord::new(i, format!("Beer {i}"), format!("${i}")))
            .collect()
    }

    fn cards(beers: &[BeerRecord]) -> Vec<BeerCard<'_>> {
        beers.iter().map(|b| BeerCard::new(b, false, "/ph")).collect()
    }

    #[test]
    fn test_grid_records_layout() {
        let beers = beers(5);
        let cards = cards(&beers);
        let mut grid = GridState::default();

        let mut term = TestTerminal::with_size(80, 12);
        term.render_stateful_widget(CatalogGrid::new(&cards), term.area(), &mut grid);

        assert_eq!(grid.columns, 2);
        assert_eq!(grid.visible_rows, 2);
        assert!(term.buffer_contains("Beer 1"));
        assert!(term.buffer_contains("Beer 4"));
        // Third row is off screen
        assert!(!term.buffer_contains("Beer 5"));
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        let beers = beers(5);
        let cards = cards(&beers);
        let mut grid = GridState {
            selected: 4,
            ..GridState::default()
        };

        let mut term = TestTerminal::with_size(80, 12);
        term.render_stateful_widget(CatalogGrid::new(&cards), term.area(), &mut grid);

        assert_eq!(grid.scroll_row, 1);
        assert!(term.buffer_contains("Beer 5"));
        assert!(!term.buffer_contains("Beer 1 "));
    }

    #[test]
    fn test_single_column_on_narrow_terminal() {
        let beers = beers(2);
        let cards = cards(&beers);
        let mut grid = GridState::default();

        let mut term = TestTerminal::with_size(40, 12);
        term.render_stateful_widget(CatalogGrid::new(&cards), term.area(), &mut grid);

        assert_eq!(grid.columns, 1);
        assert!(term.line_contains(1, "Beer 1"));
        assert!(term.line_contains(7, "Beer 2"));
    }
}
