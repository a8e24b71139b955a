//! Search box widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub const PLACEHOLDER: &str = "Search for your favorite beer...";
pub const CLEAR_HINT: &str = "[x] Ctrl+U";

/// Single-line search box bound to the catalog search string.
///
/// The clear affordance is drawn only while the query is non-empty.
pub struct SearchInput<'a> {
    query: &'a str,
    focused: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            focused: true,
        }
    }

    /// Dim the box while an overlay has the keyboard
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let show_clear = !self.query.is_empty();
        let hint_width = if show_clear {
            CLEAR_HINT.width() as u16 + 1
        } else {
            0
        };
        let text_width = inner.width.saturating_sub(hint_width);

        let mut spans = vec![Span::styled("/ ", styles::accent_bold())];
        if self.query.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            // Keep the end of a long query visible, where the cursor is
            let budget = usize::from(text_width).saturating_sub(3);
            let shown = tail_to_width(self.query, budget);
            spans.push(Span::styled(shown, styles::text_primary()));
            if self.focused {
                spans.push(Span::styled("_", styles::accent()));
            }
        }

        let text_area = Rect {
            width: text_width,
            ..inner
        };
        Paragraph::new(Line::from(spans)).render(text_area, buf);

        if show_clear && inner.width > hint_width {
            let hint_area = Rect {
                x: inner.x + inner.width - hint_width + 1,
                y: inner.y,
                width: hint_width - 1,
                height: 1,
            };
            Paragraph::new(Span::styled(CLEAR_HINT, styles::keybinding())).render(hint_area, buf);
        }
    }
}

/// The longest suffix of `text` that fits in `max_width` cells
fn tail_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    text.char_indices()
        .map(|(idx, _)| &text[idx..])
        .find(|tail| tail.width() <= max_width)
        .unwrap_or_default()
        .to_string()
}
