//! Custom widget components

mod beer_card;
mod catalog_grid;
mod details;
mod empty_state;
mod footer;
mod header;
mod loading;
pub mod modal_overlay;
mod search_input;

pub use beer_card::BeerCardView;
pub use catalog_grid::CatalogGrid;
pub use details::DetailsPopup;
pub use empty_state::EmptyState;
pub use footer::Footer;
pub use header::CatalogHeader;
pub use loading::LoadingIndicator;
pub use search_input::SearchInput;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `text` to at most `max_width` terminal cells, marking the cut with "…"
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Amber Ale", 20), "Amber Ale");
        assert_eq!(truncate_to_width("Amber Ale", 9), "Amber Ale");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("India Pale Ale", 8), "India P…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two cells wide
        assert_eq!(truncate_to_width("麦酒麦酒", 5), "麦酒…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("Stout", 0), "");
    }
}
