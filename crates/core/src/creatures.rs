//! The snail and the frogs hunting it.

use crate::types::{Position, FROG_LEAP, GARDEN_HEIGHT, GARDEN_WIDTH};

/// The player-controlled snail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snail {
    pub position: Position,
    pub alive: bool,
    /// Pellets slithered over so far
    pub pellets: u32,
    /// Lettuces eaten so far
    pub lettuces: u32,
}

impl Snail {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
            pellets: 0,
            lettuces: 0,
        }
    }
}

/// A frog
///
/// `position` is `None` once an eagle has taken the frog. `masked_lettuce`
/// remembers a lettuce the frog is sitting on, so it can be put back when
/// the frog jumps off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frog {
    pub position: Option<Position>,
    pub masked_lettuce: Option<Position>,
}

impl Frog {
    pub fn new(position: Position) -> Self {
        Self {
            position: Some(position),
            masked_lettuce: None,
        }
    }

    /// Whether the frog is still in the garden
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Take the frog out of the game for good
    pub fn remove(&mut self) {
        self.position = None;
        self.masked_lettuce = None;
    }
}

/// Where a frog at `from` lands when it leaps toward `target`
///
/// Each axis moves `FROG_LEAP` cells toward the target independently. A jump
/// that would reach the wall (or beyond) is pulled back to the last interior
/// cell on that axis; an axis already level with the target stays put.
pub fn leap_toward(from: Position, target: Position) -> Position {
    Position {
        row: leap_axis(from.row, target.row, GARDEN_HEIGHT),
        col: leap_axis(from.col, target.col, GARDEN_WIDTH),
    }
}

fn leap_axis(from: i8, target: i8, size: i8) -> i8 {
    if target > from {
        let next = from + FROG_LEAP;
        if next >= size - 1 {
            size - 2
        } else {
            next
        }
    } else if target < from {
        let next = from - FROG_LEAP;
        if next < 1 {
            1
        } else {
            next
        }
    } else {
        from
    }
}
