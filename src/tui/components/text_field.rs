//! # TextField Component
//!
//! Single-line text input used by the registration form.
//!
//! The buffer and cursor are internal state. `focused` and `invalid` are
//! props set by the parent form every frame. When the text is wider than the
//! field, the view scrolls horizontally so the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border consumed on each side of the field
const BORDER_OFFSET: u16 = 1;

/// Emitted when the buffer or cursor changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edited;

pub struct TextField {
    pub label: &'static str,
    /// Prop: draws the cursor and a highlighted border
    pub focused: bool,
    /// Prop: field was named by the last validation error
    pub invalid: bool,
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            focused: false,
            invalid: false,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the contents, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// Text visible in a field `width` columns wide, and the cursor column
    /// within it.
    fn visible(&self, width: u16) -> (&str, u16) {
        let width = usize::from(width);
        if width == 0 {
            return ("", 0);
        }

        let before = &self.buffer[..self.cursor];
        let mut start = 0;
        // Keep one column free for the cursor itself
        while before[start..].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }

        let mut end = start;
        let mut used = 0;
        for c in self.buffer[start..].chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end += c.len_utf8();
        }

        (&self.buffer[start..end], before[start..].width() as u16)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.invalid {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
        let (text, cursor_col) = self.visible(inner_width);

        frame.render_widget(Paragraph::new(text).block(block), area);

        if self.focused {
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + cursor_col,
                area.y + BORDER_OFFSET,
            ));
        }
    }
}

impl EventHandler for TextField {
    type Event = Edited;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(Edited)
            }
            TuiEvent::Paste(text) => {
                // Single line: a pasted newline would be invisible
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &line);
                self.cursor += line.len();
                Some(Edited)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Edited
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Edited
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                Edited
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                Edited
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                Edited
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                Edited
            }),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
