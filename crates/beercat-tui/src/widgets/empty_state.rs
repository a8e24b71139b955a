//! Empty-state message

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct EmptyState<'a> {
    message: &'a str,
    is_error: bool,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            is_error: false,
        }
    }

    /// Style the message as a diagnostic
    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = if self.is_error {
            styles::status_red()
        } else {
            styles::text_secondary()
        };
        let row = Rect {
            y: area.y + area.height / 2,
            height: area.height - area.height / 2,
            ..area
        };
        Paragraph::new(Line::from(Span::styled(self.message, style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(row, buf);
    }
}
