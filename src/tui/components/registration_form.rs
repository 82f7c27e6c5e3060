//! # RegistrationForm Component
//!
//! The four product fields plus focus handling.
//!
//! ## Keys
//!
//! - Tab / Down: next field, Shift+Tab / Up: previous field (both wrap)
//! - Enter: submit all four fields as they stand
//! - Everything else goes to the focused `TextField`
//!
//! The form never validates. It hands raw text to the core and re-loads
//! whatever the core sends back, focusing the field a rejection names.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::core::validation::{FormField, ProductForm, ValidationError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 60;

/// High-level events emitted by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(ProductForm),
}

pub struct RegistrationForm {
    fields: [TextField; 4],
    focus: usize,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        let mut form = Self {
            fields: FormField::ALL.map(|f| TextField::new(f.label())),
            focus: 0,
        };
        form.sync_focus();
        form
    }

    /// Show `form` and mark the field named by `error`, focusing it.
    /// Without an error, focus returns to the first field.
    pub fn load(&mut self, form: &ProductForm, error: Option<ValidationError>) {
        for (field, kind) in self.fields.iter_mut().zip(FormField::ALL) {
            field.set_text(form.field(kind));
            field.invalid = error.is_some_and(|e| e.field() == kind);
        }
        self.focus = error
            .and_then(|e| FormField::ALL.iter().position(|&f| f == e.field()))
            .unwrap_or(0);
        self.sync_focus();
    }

    /// The current raw input.
    pub fn to_form(&self) -> ProductForm {
        let mut form = ProductForm::default();
        for (field, kind) in self.fields.iter().zip(FormField::ALL) {
            *form.field_mut(kind) = field.text().to_string();
        }
        form
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focus;
        }
    }
}

impl Component for RegistrationForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Register Product ")
            .title_bottom(
                Line::from(" Tab Next field  Enter Register  Ctrl+C Quit ").centered(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(inner);
        let rows = Layout::vertical([Constraint::Length(FIELD_HEIGHT); 4])
            .flex(Flex::Center)
            .split(column);

        for (field, row) in self.fields.iter_mut().zip(rows.iter()) {
            field.render(frame, *row);
        }
    }
}

impl EventHandler for RegistrationForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(FormEvent::Submit(self.to_form())),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.move_focus(true);
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.move_focus(false);
                None
            }
            other => {
                // Editing clears the error highlight on that field
                if self.fields[self.focus].handle_event(other).is_some() {
                    self.fields[self.focus].invalid = false;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(form: &mut RegistrationForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_fill_and_submit() {
        let mut form = RegistrationForm::new();
        type_str(&mut form, "Hammer");
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "Tools");
        form.handle_event(&TuiEvent::NextField);
        type_str(&mut form, "9.99");
        form.handle_event(&TuiEvent::CursorDown);
        type_str(&mut form, "3");

        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(FormEvent::Submit(ProductForm::new("Hammer", "Tools", "9.99", "3")))
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.focused_field(), FormField::Name);
        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focused_field(), FormField::Quantity);
        form.handle_event(&TuiEvent::NextField);
        assert_eq!(form.focused_field(), FormField::Name);
    }

    #[test]
    fn test_load_with_error_focuses_offending_field() {
        let mut form = RegistrationForm::new();
        let raw = ProductForm::new("Hammer", "Tools", "0", "5");
        form.load(
            &raw,
            Some(ValidationError::NonPositiveValue {
                field: FormField::Price,
            }),
        );

        assert_eq!(form.focused_field(), FormField::Price);
        assert_eq!(form.to_form(), raw);
        assert!(form.fields[2].invalid);
        assert!(!form.fields[0].invalid);
    }

    #[test]
    fn test_editing_clears_invalid_mark() {
        let mut form = RegistrationForm::new();
        form.load(
            &ProductForm::default(),
            Some(ValidationError::MissingField {
                field: FormField::Name,
            }),
        );
        assert!(form.fields[0].invalid);
        type_str(&mut form, "H");
        assert!(!form.fields[0].invalid);
    }

    #[test]
    fn test_load_empty_form_resets() {
        let mut form = RegistrationForm::new();
        type_str(&mut form, "Hammer");
        form.handle_event(&TuiEvent::NextField);

        form.load(&ProductForm::default(), None);
        assert_eq!(form.to_form(), ProductForm::default());
        assert_eq!(form.focused_field(), FormField::Name);
    }

    #[test]
    fn test_render_shows_all_labels() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = RegistrationForm::new();

        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        for kind in FormField::ALL {
            assert!(text.contains(kind.label()), "missing label {}", kind.label());
        }
        assert!(text.contains("Enter Register"));
    }
}
