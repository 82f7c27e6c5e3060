//! # Product List Component
//!
//! Registered products in registration order, one row each.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProductListState` lives in `TuiState`
//! - `ProductList` is created each frame with borrowed state and products

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::product::Product;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the product list.
#[derive(Default)]
pub struct ProductListState {
    pub selected: usize,
    pub list_state: ListState,
    len: usize,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the selection to a list of `len` products.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle a key event, returning a ListEvent if the screen should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => (self.len > 0).then_some(ListEvent::Open(self.selected)),
            TuiEvent::InputChar('s') => Some(ListEvent::ShowStatistics),
            TuiEvent::InputChar('n') | TuiEvent::Escape | TuiEvent::Backspace => {
                Some(ListEvent::NewProduct)
            }
            _ => None,
        }
    }
}

/// Events emitted by the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Open(usize),
    ShowStatistics,
    NewProduct,
}

/// Transient render wrapper for the product list.
pub struct ProductList<'a> {
    state: &'a mut ProductListState,
    products: &'a [Product],
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a mut ProductListState, products: &'a [Product]) -> Self {
        Self { state, products }
    }
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Products ")
            .title_bottom(
                Line::from(" Enter Details  s Statistics  n New  q Quit ").centered(),
            )
            .padding(Padding::horizontal(1));

        if self.products.is_empty() {
            let empty = Paragraph::new("No products registered yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .products
            .iter()
            .map(|product| {
                ListItem::new(Line::from(vec![
                    Span::raw(row_label(product)),
                    Span::styled(
                        format!("  {}", product.category()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// `"<name> (<quantity> units)"`
pub fn row_label(product: &Product) -> String {
    let unit = if product.quantity() == 1 { "unit" } else { "units" };
    format!("{} ({} {})", product.name(), product.quantity(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_row_label() {
        assert_eq!(row_label(&product("Hammer", "Tools", 9.99, 3)), "Hammer (3 units)");
        assert_eq!(row_label(&product("Drill", "Tools", 49.0, 1)), "Drill (1 unit)");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = ProductListState::new();
        state.sync(2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Open(1)));
    }

    #[test]
    fn test_sync_shrinks_selection() {
        let mut state = ProductListState::new();
        state.selected = 5;
        state.sync(3);
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_empty_list_cannot_open() {
        let mut state = ProductListState::new();
        state.sync(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('s')),
            Some(ListEvent::ShowStatistics)
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ListEvent::NewProduct));
    }

    #[test]
    fn test_render_rows() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let products = vec![
            product("Hammer", "Tools", 9.99, 3),
            product("Apple", "Food", 0.5, 100),
        ];
        let mut state = ProductListState::new();
        state.sync(products.len());

        terminal
            .draw(|f| ProductList::new(&mut state, &products).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Hammer (3 units)"));
        assert!(text.contains("Apple (100 units)"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_render_empty() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ProductListState::new();

        terminal
            .draw(|f| ProductList::new(&mut state, &[]).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("No products registered yet."));
    }
}
