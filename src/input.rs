//! Keyboard to direction arbitration.

use crossterm::event::KeyCode;

use crate::engine::GameState;
use crate::snake::Direction::{self, *};

/// Maps a game key to a direction. Letters are lowercase only.
pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

/// Holds the single pending-direction slot read by the next tick.
///
/// Several presses between two ticks collapse into the last accepted one.
/// Reversal is judged against the direction the engine latched on its last
/// tick, not against the pending slot.
#[derive(Debug, Clone)]
pub struct InputArbiter {
    pending: Direction,
}

impl InputArbiter {
    pub fn new(initial: Direction) -> Self {
        InputArbiter { pending: initial }
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn reset(&mut self, initial: Direction) {
        self.pending = initial;
    }

    /// Feeds a key press. Returns the direction now pending, or `None` if the
    /// key is not a game key or would reverse the snake onto itself.
    pub fn on_key(&mut self, code: KeyCode, state: &GameState) -> Option<Direction> {
        let candidate = key_direction(code)?;
        if state.snake().len() > 1 && candidate == state.direction().opposite() {
            return None;
        }
        self.pending = candidate;
        Some(candidate)
    }
}
