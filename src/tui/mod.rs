//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! screen, and translates keyboard events into `core::Intent` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → component event → Intent → Navigator::dispatch
//!                                                               │
//!                         TuiState sync (form, list, status) ◄──┘
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event arrived.
//! It blocks in `poll` for up to the configured interval between checks.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::Intent;
use crate::core::config::ResolvedConfig;
use crate::core::inventory::InventoryStore;
use crate::core::state::{Navigator, RenderData, ScreenId};
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ListEvent, ProductListState, RegistrationForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// One line of feedback in the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: RegistrationForm,
    pub list: ProductListState,
    pub status: Option<Status>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            list: ProductListState::new(),
            status: None,
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Disambiguation lets Esc arrive without the usual delay; terminals
        // that don't support it ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, config),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, config)
        }
    };
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> io::Result<()> {
    // One store per session, owned here and lent to the navigator
    let mut store = InventoryStore::new();
    let mut nav = Navigator::new();
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &nav, &store, &mut tui, config.price_decimals))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(config.poll_interval)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(&mut nav, &mut store, &mut tui, event) == Flow::Quit {
                info!("Quitting with {} products registered", store.len());
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one terminal event to the active screen.
pub fn handle_event(
    nav: &mut Navigator,
    store: &mut InventoryStore,
    tui: &mut TuiState,
    event: TuiEvent,
) -> Flow {
    match event {
        TuiEvent::ForceQuit => return Flow::Quit,
        TuiEvent::Resize => return Flow::Continue,
        _ => {}
    }

    let intent = match nav.screen_id() {
        ScreenId::Registration => match tui.form.handle_event(&event) {
            Some(FormEvent::Submit(form)) => Some(Intent::Submit(form)),
            None => None,
        },
        ScreenId::List => {
            if event == TuiEvent::InputChar('q') {
                return Flow::Quit;
            }
            tui.list.sync(store.len());
            tui.list.handle_event(&event).map(|list_event| match list_event {
                ListEvent::Open(index) => Intent::SelectProduct(index),
                ListEvent::ShowStatistics => Intent::ViewStatistics,
                ListEvent::NewProduct => Intent::Back,
            })
        }
        ScreenId::Details | ScreenId::Statistics => match event {
            TuiEvent::InputChar('q') => return Flow::Quit,
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                Some(Intent::Back)
            }
            _ => None,
        },
    };

    if let Some(intent) = intent {
        apply_intent(nav, store, tui, intent);
    }
    Flow::Continue
}

/// Dispatch `intent` and bring the presentation state in line with the
/// screen the navigator lands on.
fn apply_intent(
    nav: &mut Navigator,
    store: &mut InventoryStore,
    tui: &mut TuiState,
    intent: Intent,
) {
    let from = nav.screen_id();
    let before = store.len();

    let (screen, data) = nav.dispatch(store, intent);
    debug!("TUI now on {:?}", screen);

    match data {
        RenderData::Registration { form, error } => {
            tui.form.load(form, error);
            tui.status = error.map(|e| Status::error(e.to_string()));
        }
        RenderData::List(products) => {
            tui.list.sync(products.len());
            tui.status = if from == ScreenId::Registration && products.len() > before {
                // Land on the product that was just added
                tui.list.selected = products.len() - 1;
                tui.list.sync(products.len());
                products
                    .last()
                    .map(|p| Status::info(format!("Registered {}", p.name())))
            } else {
                None
            };
        }
        RenderData::Details(_) | RenderData::Statistics { .. } => {
            tui.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(nav: &mut Navigator, store: &mut InventoryStore, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(nav, store, tui, TuiEvent::InputChar(c));
        }
    }

    fn register(
        nav: &mut Navigator,
        store: &mut InventoryStore,
        tui: &mut TuiState,
        fields: [&str; 4],
    ) {
        for (i, text) in fields.iter().enumerate() {
            type_str(nav, store, tui, text);
            if i < 3 {
                handle_event(nav, store, tui, TuiEvent::NextField);
            }
        }
        handle_event(nav, store, tui, TuiEvent::Submit);
    }

    #[test]
    fn test_register_through_keys() {
        let mut nav = Navigator::new();
        let mut store = InventoryStore::new();
        let mut tui = TuiState::new();

        register(&mut nav, &mut store, &mut tui, ["Hammer", "Tools", "9.99", "3"]);

        assert_eq!(nav.screen_id(), ScreenId::List);
        assert_eq!(store.len(), 1);
        assert_eq!(tui.status, Some(Status::info("Registered Hammer")));
    }

    #[test]
    fn test_validation_error_shows_in_status_and_keeps_fields() {
        let mut nav = Navigator::new();
        let mut store = InventoryStore::new();
        let mut tui = TuiState::new();

        register(&mut nav, &mut store, &mut tui, ["Hammer", "Tools", "0", "5"]);

        assert_eq!(nav.screen_id(), ScreenId::Registration);
        assert!(store.is_empty());
        let status = tui.status.clone().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("greater than 0"));
        assert_eq!(tui.form.to_form().name, "Hammer");
        assert_eq!(
            tui.form.focused_field(),
            crate::core::validation::FormField::Price
        );
    }

    #[test]
    fn test_full_navigation_cycle() {
        let mut nav = Navigator::new();
        let mut store = InventoryStore::new();
        let mut tui = TuiState::new();

        register(&mut nav, &mut store, &mut tui, ["Hammer", "Tools", "9.99", "3"]);
        // Back to an empty form for the second product
        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::InputChar('n'));
        assert_eq!(nav.screen_id(), ScreenId::Registration);
        assert_eq!(tui.form.to_form(), Default::default());
        register(&mut nav, &mut store, &mut tui, ["Saw", "Tools", "15", "2"]);

        // Newest product is selected; open the first one instead
        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::CursorUp);
        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::Submit);
        assert_eq!(nav.screen_id(), ScreenId::Details);
        assert_eq!(nav.selected_product().map(|p| p.name()), Some("Hammer"));

        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::Escape);
        assert_eq!(nav.screen_id(), ScreenId::List);
        assert!(nav.selected_product().is_none());

        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::InputChar('s'));
        assert_eq!(nav.screen_id(), ScreenId::Statistics);
        handle_event(&mut nav, &mut store, &mut tui, TuiEvent::Backspace);
        assert_eq!(nav.screen_id(), ScreenId::List);
    }

    #[test]
    fn test_quit_keys() {
        let mut nav = Navigator::new();
        let mut store = InventoryStore::new();
        let mut tui = TuiState::new();

        // 'q' is just text on the form
        assert_eq!(
            handle_event(&mut nav, &mut store, &mut tui, TuiEvent::InputChar('q')),
            Flow::Continue
        );
        assert_eq!(tui.form.to_form().name, "q");
        assert_eq!(
            handle_event(&mut nav, &mut store, &mut tui, TuiEvent::ForceQuit),
            Flow::Quit
        );

        register(&mut nav, &mut store, &mut tui, ["ammer", "Tools", "1", "1"]);
        assert_eq!(nav.screen_id(), ScreenId::List);
        assert_eq!(
            handle_event(&mut nav, &mut store, &mut tui, TuiEvent::InputChar('q')),
            Flow::Quit
        );
    }
}
