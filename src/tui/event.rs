use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Back,
    Select,
    Up,
    Down,
    NextPage,
    PrevPage,
    ToggleView,
    ShowRaces,
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Enter) => Some(TuiEvent::Select),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Right) | (_, KeyCode::Char('n')) => Some(TuiEvent::NextPage),
        (_, KeyCode::Left) | (_, KeyCode::Char('p')) => Some(TuiEvent::PrevPage),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleView),
        (_, KeyCode::Char('r')) => Some(TuiEvent::ShowRaces),
        _ => None,
    }
}
