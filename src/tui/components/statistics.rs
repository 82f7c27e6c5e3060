//! # Statistics Component
//!
//! Total inventory value and product count. Both are props computed by the
//! core on every dispatch, so this view has nothing to cache.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Statistics {
    pub total_value: f64,
    pub product_count: usize,
    pub price_decimals: usize,
}

impl Component for Statistics {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Statistics ")
            .title_bottom(Line::from(" Esc Back  q Quit ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::raw("Total inventory value: "),
                Span::styled(
                    format!("{:.*}", self.price_decimals, self.total_value),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("Products registered: {}", self.product_count),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
