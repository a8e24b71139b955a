//! Loading spinner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading beers...";

/// Animated spinner, centered vertically in its area
pub struct LoadingIndicator {
    frame: usize,
}

impl LoadingIndicator {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }
}

impl Widget for LoadingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.glyph(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, styles::text_secondary()),
        ]);
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
