//! # TitleBar Component
//!
//! Top status bar: current screen, product count, and the status line.
//!
//! TitleBar is purely presentational. All fields are props:
//! - `screen`, `product_count`: core state
//! - `status`: TUI state (last validation error or confirmation)
//!
//! The status line is where validation errors surface, taking the place of
//! a transient notification.
//!
//! 1. **With status**: `"Stockpile | Products (2) | Registered Hammer"`
//! 2. **Default**: `"Stockpile | Products (2)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::ScreenId;
use crate::tui::Status;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub screen: ScreenId,
    pub product_count: usize,
    pub status: Option<&'a Status>,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen: ScreenId, product_count: usize, status: Option<&'a Status>) -> Self {
        Self {
            screen,
            product_count,
            status,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Stockpile", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {} ({})", self.screen, self.product_count)),
        ];

        if let Some(status) = self.status {
            let style = if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(status.text.clone(), style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
