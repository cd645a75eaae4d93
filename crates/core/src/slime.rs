//! Slime ledger - ring buffer of recent slime deposits
//!
//! Holds exactly [`SLIME_LIFETIME`] slots. Each turn the cursor advances one
//! slot: whatever was stored there was laid `SLIME_LIFETIME` turns ago and is
//! handed back for dissolving, and this turn's deposit (if any) takes its place.

use crate::types::{Position, SLIME_LIFETIME};

/// Fixed-lifetime record of where slime was laid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlimeLedger {
    slots: [Option<Position>; SLIME_LIFETIME],
    cursor: usize,
}

impl SlimeLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            slots: [None; SLIME_LIFETIME],
            cursor: 0,
        }
    }

    /// Advance one turn
    ///
    /// Returns the expired deposit from `SLIME_LIFETIME` turns ago, if there was
    /// one, and records `deposit` in its slot.
    pub fn advance(&mut self, deposit: Option<Position>) -> Option<Position> {
        self.cursor = (self.cursor + 1) % SLIME_LIFETIME;
        let expired = self.slots[self.cursor].take();
        self.slots[self.cursor] = deposit;
        expired
    }

    /// Number of live deposits
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Whether a live deposit is recorded at `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.slots.iter().any(|s| *s == Some(pos))
    }

    /// Live deposits, oldest first
    pub fn deposits(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=SLIME_LIFETIME).filter_map(move |i| self.slots[(self.cursor + i) % SLIME_LIFETIME])
    }

    /// Forget every deposit
    pub fn clear(&mut self) {
        self.slots = [None; SLIME_LIFETIME];
        self.cursor = 0;
    }
}

impl Default for SlimeLedger {
    fn default() -> Self {
        Self::new()
    }
}
