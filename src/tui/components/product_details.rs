//! # ProductDetails Component
//!
//! Stateless view of the selected product. It renders the snapshot the
//! navigator took at selection time and never reads the store.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::product::Product;
use crate::tui::component::Component;

pub struct ProductDetails<'a> {
    pub product: &'a Product,
    pub price_decimals: usize,
}

impl<'a> ProductDetails<'a> {
    pub fn new(product: &'a Product, price_decimals: usize) -> Self {
        Self {
            product,
            price_decimals,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().add_modifier(Modifier::BOLD);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
        };

        vec![
            row("Name: ", self.product.name().to_string()),
            row("Category: ", self.product.category().to_string()),
            row(
                "Price: ",
                format!("{:.*}", self.price_decimals, self.product.unit_price()),
            ),
            row("Quantity: ", self.product.quantity().to_string()),
        ]
    }
}

impl Component for ProductDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Product Details ")
            .title_bottom(Line::from(" Esc Back  q Quit ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
