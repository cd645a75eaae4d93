use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputProvider;
use crate::map::map_key_event;
use crate::types::PlayerInput;

/// Blocking keyboard input, one key press per turn
///
/// Expects the terminal to be in raw mode. Releases, repeats (on terminals
/// that report them), resizes and mouse events are skipped.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next key press
    pub fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl InputProvider for KeyboardInput {
    fn next_input(&mut self) -> Result<PlayerInput> {
        Ok(map_key_event(self.next_key()?))
    }
}
