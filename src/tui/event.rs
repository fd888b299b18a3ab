use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events.
///
/// Scroll-flavored variants (`Up`, `Down`, `PageUp`, ...) are deliberately
/// semantic-free: the same key means "move the cursor" when the choice list
/// has focus and "scroll a line" when the viewport does. Routing decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    FocusToggle,
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Activate,
    Resize(u16, u16),
}

/// Poll for an event with timeout (blocks up to 100ms).
pub fn poll_event() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::from_millis(100))
}

fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(&event::read().ok()?)
}

/// Translate a crossterm event into a `TuiEvent`. Unrecognized input maps
/// to `None` and is silently dropped.
pub(crate) fn translate(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusToggle),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Up),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::Down),
                (_, KeyCode::PageUp) | (_, KeyCode::Char('b')) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown)
                | (_, KeyCode::Char('f'))
                | (_, KeyCode::Char(' ')) => Some(TuiEvent::PageDown),
                (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Some(TuiEvent::Top),
                (_, KeyCode::End) | (_, KeyCode::Char('G')) => Some(TuiEvent::Bottom),
                (_, KeyCode::Enter) => Some(TuiEvent::Activate),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(*width, *height)),
        _ => None,
    }
}
