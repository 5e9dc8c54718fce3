use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement headings, one unit displacement along a single axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the 180° reversal of this heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` displacement in board units for one tick.
    #[must_use]
    pub fn displacement(self, unit: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -unit),
            Self::Down => (0, unit),
            Self::Left => (-unit, 0),
            Self::Right => (unit, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Confirm,
    Quit,
}

/// Polls the terminal for one pending input event without blocking.
///
/// Returns `Ok(None)` when no event is queued or the event carries no game
/// meaning. The caller drains the queue by polling in a loop, so the latest
/// heading request between two ticks wins.
pub fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    Ok(map_key(key.code))
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Heading(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Heading(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Heading(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Heading(Heading::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
