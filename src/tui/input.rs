//! Key handling for the interactive screen.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{Action, PAGE_STEP};
use crate::pass::CharClass;

/// Wait up to `timeout` for the next action. `None` on timeout or on
/// events with no binding.
pub fn next_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        Event::Resize(..) => Ok(Some(Action::Redraw)),
        _ => Ok(None),
    }
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Right | KeyCode::Char('+') => Action::Increase(1),
        KeyCode::Left | KeyCode::Char('-') => Action::Decrease(1),
        KeyCode::PageUp => Action::Increase(PAGE_STEP),
        KeyCode::PageDown => Action::Decrease(PAGE_STEP),
        KeyCode::Down | KeyCode::Tab => Action::FocusNext,
        KeyCode::Up | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char(' ') => Action::ToggleFocused,
        KeyCode::Char('1') => Action::Toggle(CharClass::Lower),
        KeyCode::Char('2') => Action::Toggle(CharClass::Upper),
        KeyCode::Char('3') => Action::Toggle(CharClass::Number),
        KeyCode::Char('4') => Action::Toggle(CharClass::Symbol),
        _ => return None,
    };
    Some(action)
}
