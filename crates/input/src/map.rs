//! Key mapping from terminal events to player inputs.

use crate::types::{Direction, PlayerInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one key press to a player input.
///
/// Every key means something: anything unrecognised is a move with no
/// direction, which the game reports as an invalid key.
pub fn map_key_event(key: KeyEvent) -> PlayerInput {
    if should_quit(key) {
        return PlayerInput::Quit;
    }
    PlayerInput::Move(direction_for(key.code))
}

fn direction_for(code: KeyCode) -> Direction {
    match code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Direction::Right,
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Direction::Down,
        _ => Direction::None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
