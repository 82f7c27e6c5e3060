use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Handled before any screen sees them
    ForceQuit, // Ctrl+C
    Resize,

    // Routed to the active screen
    Submit,
    Escape,
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    NextField, // Tab
    PrevField, // Shift+Tab
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a raw crossterm event to a `TuiEvent`, dropping anything we don't use.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases and repeats too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        _ => None,
    }
}
