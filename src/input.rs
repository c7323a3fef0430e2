//! Keyboard input.
//!
//! Polling is non-blocking: each call drains whatever the terminal has
//! queued and returns immediately.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Jump,
    Reset,
    /// The surface changed size, in terminal cells.
    Resize(u16, u16),
}

pub trait InputSource {
    /// Every event queued since the last poll, oldest first.
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>>;
}

/// Translate a raw terminal event. Unbound keys map to `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Jump),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        Event::Resize(cols, rows) => Some(InputEvent::Resize(*cols, *rows)),
        _ => None,
    }
}

/// Reads crossterm events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = map_event(&event::read()?) {
                events.push(input);
            }
        }
        Ok(events)
    }
}
