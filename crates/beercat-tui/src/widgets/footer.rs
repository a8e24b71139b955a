//! Footer with result count and key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const BROWSE_HINTS: [(&str, &str); 4] = [
    ("↑↓←→", "move"),
    ("Enter", "details"),
    ("Ctrl+U", "clear"),
    ("Esc", "quit"),
];

const DETAILS_HINTS: [(&str, &str); 1] = [("Esc", "close")];

pub struct Footer<'a> {
    summary: Option<&'a str>,
    details_open: bool,
}

impl<'a> Footer<'a> {
    pub fn new(summary: Option<&'a str>) -> Self {
        Self {
            summary,
            details_open: false,
        }
    }

    pub fn details_open(mut self, open: bool) -> Self {
        self.details_open = open;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let hints: &[(&str, &str)] = if self.details_open {
            &DETAILS_HINTS
        } else {
            &BROWSE_HINTS
        };
        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        let hints = Line::from(spans);
        let hints_width = (hints.width() as u16).min(area.width);

        let hints_area = Rect {
            x: area.right() - hints_width,
            width: hints_width,
            ..area
        };
        let summary_area = Rect {
            width: area.width - hints_width,
            ..area
        };

        if let Some(summary) = self.summary {
            Paragraph::new(Span::styled(format!(" {summary}"), styles::text_secondary()))
                .render(summary_area, buf);
        }
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(hints_area, buf);
    }
}
