//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. Store
//! state is owned by the `Runtime`; this module only keeps presentation
//! state (screen stack, layout, selection) in `TuiState`.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a store is loading): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on input, a completed fetch,
//!   or terminal resize.

pub mod component;
pub mod components;
pub mod event;
pub mod navigation;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::ViewMode;
use crate::api::{ErgastClient, RacingApi};
use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::runtime::Runtime;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::navigation::{Navigator, Screen};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub navigator: Navigator,
    pub view_mode: ViewMode,
    // Row highlights; clamped to the visible list when used
    pub driver_selected: usize,
    pub race_selected: usize,
}

impl TuiState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }
}

fn step(selected: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = selected.min(len - 1);
    if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}

/// Applies one input event to the presentation state and returns the core
/// actions it implies, in order.
pub fn handle_event(tui: &mut TuiState, app: &App, event: TuiEvent) -> Vec<Action> {
    let screen = tui.navigator.current().clone();
    match (event, &screen) {
        (TuiEvent::Quit, _) => vec![Action::Quit],
        (TuiEvent::Resize, _) => Vec::new(),
        (TuiEvent::ToggleView, _) => {
            tui.view_mode = tui.view_mode.toggle();
            debug!("View mode: {:?}", tui.view_mode);
            Vec::new()
        }
        (TuiEvent::Back, _) => {
            let action = tui.navigator.pop();
            if matches!(screen, Screen::Races(_)) {
                tui.race_selected = 0;
            }
            action.into_iter().collect()
        }

        (TuiEvent::Up | TuiEvent::Down, Screen::Drivers) => {
            let down = event == TuiEvent::Down;
            tui.driver_selected = step(tui.driver_selected, app.drivers.items().len(), down);
            Vec::new()
        }
        (TuiEvent::Up | TuiEvent::Down, Screen::Races(_)) => {
            let down = event == TuiEvent::Down;
            tui.race_selected = step(tui.race_selected, app.races.items().len(), down);
            Vec::new()
        }
        (TuiEvent::NextPage, Screen::Drivers) if app.drivers.pagination().has_next() => {
            tui.driver_selected = 0;
            vec![Action::NextPage]
        }
        (TuiEvent::PrevPage, Screen::Drivers) if app.drivers.pagination().has_prev() => {
            tui.driver_selected = 0;
            vec![Action::PrevPage]
        }
        (TuiEvent::Select, Screen::Drivers) => {
            // The spinner hides the previous page while a refetch runs
            let items = app.drivers.items();
            if items.is_empty() || app.drivers.is_loading() {
                return Vec::new();
            }
            let driver = &items[tui.driver_selected.min(items.len() - 1)];
            tui.navigator
                .push(Screen::DriverDetails(driver.driver_id.clone()))
                .into_iter()
                .collect()
        }
        (TuiEvent::Select | TuiEvent::ShowRaces, Screen::DriverDetails(driver_id)) => {
            tui.race_selected = 0;
            tui.navigator
                .push(Screen::Races(driver_id.clone()))
                .into_iter()
                .collect()
        }
        _ => Vec::new(),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Without disambiguation some terminals delay a bare Esc
        execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api = Arc::new(ErgastClient::with_timeout(
        Some(config.base_url.clone()),
        config.timeout,
    ));
    info!("Using API at {}", api.base_url());

    let mut runtime = Runtime::new(App::from_config(&config), api);
    let mut tui = TuiState::new(config.view_mode);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Initial page; afterwards the cursor drives refetches
    let limit = runtime.app().drivers.limit();
    runtime.dispatch(Action::LoadDrivers { offset: 0, limit });

    let start_time = Instant::now();
    let mut needs_redraw = true;

    let result = loop {
        let app = runtime.app();
        let animating = app.drivers.is_loading() || app.races.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, app, &tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in handle_event(&mut tui, runtime.app(), event) {
                if runtime.dispatch(action) == Effect::Quit {
                    should_quit = true;
                }
            }
        }
        if should_quit {
            break Ok(());
        }

        // Completed fetches
        if runtime.drain() > 0 {
            needs_redraw = true;
        }
    };

    ratatui::restore();
    result
}
