//! Screen layout definitions for the TUI
//!
//! Fixed-height header, search box and footer around a card grid that takes
//! the remaining rows. The grid's column count follows the terminal width.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title + tagline + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Search box: bordered single-line input
pub const SEARCH_HEIGHT: u16 = 3;

/// Footer: one line of counts and key hints
pub const FOOTER_HEIGHT: u16 = 1;

/// One card: border + name + price + rating + image reference + border
pub const CARD_HEIGHT: u16 = 6;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    /// Card grid, loading spinner or empty state
    pub content: Rect,
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

/// Number of card columns for a grid `width` cells wide
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

/// Number of whole card rows that fit in `height`
pub fn grid_rows(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

/// Split a grid row into `columns` equal cells
pub fn card_cells(row: Rect, columns: usize) -> Vec<Rect> {
    let constraints = (0..columns).map(|_| Constraint::Ratio(1, columns as u32));
    Layout::horizontal(constraints).split(row).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.search.y, 4);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.content.y, 7);
        assert_eq!(layout.content.height, 16); // 24 - 4 - 3 - 1
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.search.height + layout.content.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_grid_columns_by_width() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(59), 1);
        assert_eq!(grid_columns(60), 2);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(139), 3);
        assert_eq!(grid_columns(140), 4);
        assert_eq!(grid_columns(300), 4);
    }

    #[test]
    fn test_grid_rows_never_zero() {
        assert_eq!(grid_rows(0), 1);
        assert_eq!(grid_rows(5), 1);
        assert_eq!(grid_rows(16), 2);
        assert_eq!(grid_rows(18), 3);
    }

    #[test]
    fn test_card_cells_cover_row() {
        let row = Rect::new(0, 7, 80, CARD_HEIGHT);
        let cells = card_cells(row, 2);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].width + cells[1].width, 80);
        assert_eq!(cells[1].x, cells[0].x + cells[0].width);
    }
}
