use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;
use crate::error::DisplayError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Quit,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Restart | Key::Quit => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Close request from outside the game, e.g. Ctrl-C.
    Quit,
    KeyDown(Key),
}

/// Non-blocking event source, drained once per tick.
pub trait InputSource {
    fn poll(&mut self) -> Result<Vec<InputEvent>, DisplayError>;
}

/// Maps a terminal key press to a game event. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    let key = match key.code {
        KeyCode::Up | KeyCode::Char('w') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') => Key::Down,
        KeyCode::Left | KeyCode::Char('a') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') => Key::Right,
        KeyCode::Char(' ') => Key::Restart,
        KeyCode::Esc | KeyCode::Char('q') => Key::Quit,
        _ => return None,
    };
    Some(InputEvent::KeyDown(key))
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>, DisplayError> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).map_err(DisplayError::Input)? {
            if let Event::Key(key) = event::read().map_err(DisplayError::Input)? {
                events.extend(map_key(key));
            }
        }
        Ok(events)
    }
}

/// Replays prepared batches, one per poll, then reports nothing.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>, DisplayError> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
