//! Header with the catalog title and tagline

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "Craft Beer Collection";
pub const TAGLINE: &str = "Discover and explore our handpicked selection of the finest ales";

/// Main header showing the title and tagline, centered
#[derive(Default)]
pub struct CatalogHeader;

impl CatalogHeader {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for CatalogHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![Line::from(Span::styled(TITLE, styles::accent_bold()))];
        if inner.height >= 2 {
            let tagline = super::truncate_to_width(TAGLINE, usize::from(inner.width));
            lines.push(Line::from(Span::styled(
                tagline,
                Style::default().fg(palette::ACCENT_DIM),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
