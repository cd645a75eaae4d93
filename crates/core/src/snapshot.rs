use std::hash::{Hash, Hasher};

use crate::types::{Message, Occupant, Position, GARDEN_HEIGHT, GARDEN_WIDTH, NUM_FROGS};

/// Copyable view of a game, suitable for rendering and recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub garden: [[Occupant; GARDEN_WIDTH as usize]; GARDEN_HEIGHT as usize],
    pub snail: Position,
    pub frogs: [Option<Position>; NUM_FROGS],
    pub alive: bool,
    pub won: bool,
    pub over: bool,
    pub pellets: u32,
    pub lettuces: u32,
    pub message: Message,
    pub turn: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the snail can still take a turn
    pub fn playable(&self) -> bool {
        !self.over
    }

    /// Occupant at `pos`, with anything off the grid reading as wall
    pub fn cell(&self, pos: Position) -> Occupant {
        if pos.row < 0 || pos.row >= GARDEN_HEIGHT || pos.col < 0 || pos.col >= GARDEN_WIDTH {
            return Occupant::Wall;
        }
        self.garden[pos.row as usize][pos.col as usize]
    }

    /// Stable 64-bit digest of the snapshot
    ///
    /// Identical across runs and platforms, so replays can be checked turn by turn.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            garden: [[Occupant::Blank; GARDEN_WIDTH as usize]; GARDEN_HEIGHT as usize],
            snail: Position::default(),
            frogs: [None; NUM_FROGS],
            alive: true,
            won: false,
            over: false,
            pellets: 0,
            lettuces: 0,
            message: Message::Ready,
            turn: 0,
            seed: 0,
        }
    }
}

/// 64-bit FNV-1a. `DefaultHasher` output is not stable across Rust releases.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
