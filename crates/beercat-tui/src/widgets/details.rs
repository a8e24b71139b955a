//! Details overlay for the selected beer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use beercat_core::BeerCard;

use crate::theme::styles;

use super::modal_overlay::centered_rect;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 10;

/// Popup listing every field of one card, including id and full image URL
pub struct DetailsPopup<'a> {
    card: &'a BeerCard<'a>,
}

impl<'a> DetailsPopup<'a> {
    pub fn new(card: &'a BeerCard<'a>) -> Self {
        Self { card }
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }
}

impl Widget for DetailsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        Clear.render(popup, buf);

        let block = styles::modal_block(" Beer Details ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let image = if self.card.image.is_placeholder() {
            format!("{} (placeholder)", self.card.image.url())
        } else {
            self.card.image.url().to_string()
        };

        let lines = vec![
            Line::from(Span::styled(self.card.name.to_string(), styles::accent_bold())),
            Line::default(),
            Self::field("Id", self.card.id.to_string()),
            Self::field("Price", self.card.price.to_string()),
            Self::field("Rating", self.card.rating.clone()),
            Self::field("Reviews", self.card.reviews.clone()),
            Self::field("Image", image),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
