//! A single beer card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use beercat_core::BeerCard;

use crate::theme::{palette, styles};

use super::truncate_to_width;

/// Renders one card: name, price, rating summary and image reference
pub struct BeerCardView<'a> {
    card: &'a BeerCard<'a>,
    selected: bool,
}

impl<'a> BeerCardView<'a> {
    pub fn new(card: &'a BeerCard<'a>) -> Self {
        Self {
            card,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for BeerCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.selected).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = usize::from(inner.width);
        let name_style = if self.selected {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let image_label = if self.card.image.is_placeholder() {
            format!("img: {} (placeholder)", self.card.image.url())
        } else {
            format!("img: {}", self.card.image.url())
        };

        let lines = vec![
            Line::from(Span::styled(truncate_to_width(self.card.name, width), name_style)),
            Line::from(Span::styled(
                truncate_to_width(self.card.price, width),
                styles::accent(),
            )),
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(palette::STAR)),
                Span::styled(
                    truncate_to_width(&self.card.rating_summary(), width.saturating_sub(2)),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(Span::styled(
                truncate_to_width(&image_label, width),
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
