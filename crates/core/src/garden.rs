//! Garden module - the walled grid
//!
//! The garden is a 20x30 grid of [`Occupant`]s indexed `[row][col]`.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..29
//! (left to right). The outermost ring is wall; everything else is interior.

use crate::types::{Occupant, Position, GARDEN_HEIGHT, GARDEN_WIDTH};

const ROWS: usize = GARDEN_HEIGHT as usize;
const COLS: usize = GARDEN_WIDTH as usize;

/// The game world - one occupant per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    cells: [[Occupant; COLS]; ROWS],
}

impl Garden {
    /// Create a blank garden surrounded by walls
    pub fn new() -> Self {
        let mut cells = [[Occupant::Blank; COLS]; ROWS];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1 {
                    *cell = Occupant::Wall;
                }
            }
        }
        Self { cells }
    }

    #[inline(always)]
    fn index(pos: Position) -> Option<(usize, usize)> {
        if pos.row < 0 || pos.row >= GARDEN_HEIGHT || pos.col < 0 || pos.col >= GARDEN_WIDTH {
            return None;
        }
        Some((pos.row as usize, pos.col as usize))
    }

    /// Occupant at `pos`, or None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Occupant> {
        Self::index(pos).map(|(r, c)| self.cells[r][c])
    }

    /// Occupant at `pos`, treating anything outside the grid as wall
    pub fn at(&self, pos: Position) -> Occupant {
        self.get(pos).unwrap_or(Occupant::Wall)
    }

    /// Overwrite the occupant at `pos`
    ///
    /// Walls are fixed: writes to the border (or outside the grid) are rejected
    /// and return false.
    pub fn set(&mut self, pos: Position, occupant: Occupant) -> bool {
        if !pos.is_interior() {
            return false;
        }
        match Self::index(pos) {
            Some((r, c)) => {
                self.cells[r][c] = occupant;
                true
            }
            None => false,
        }
    }

    /// Whether `pos` currently holds `occupant`
    pub fn is(&self, pos: Position, occupant: Occupant) -> bool {
        self.get(pos) == Some(occupant)
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> &[[Occupant; COLS]; ROWS] {
        &self.cells
    }

    /// Count cells holding `occupant`
    pub fn count(&self, occupant: Occupant) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == occupant)
            .count()
    }

    /// Positions of every cell holding `occupant`, in row-major order
    pub fn positions_of(&self, occupant: Occupant) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &cell)| cell == occupant)
                .map(move |(c, _)| Position::new(r as i8, c as i8))
        })
    }

    /// Render the garden as lines of console glyphs
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_garden_has_wall_border_and_blank_interior() {
        let garden = Garden::new();
        for row in 0..GARDEN_HEIGHT {
            for col in 0..GARDEN_WIDTH {
                let pos = Position::new(row, col);
                let expected = if pos.is_interior() {
                    Occupant::Blank
                } else {
                    Occupant::Wall
                };
                assert_eq!(garden.get(pos), Some(expected), "cell {:?}", pos);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_as_wall() {
        let garden = Garden::new();
        assert_eq!(garden.get(Position::new(-1, 3)), None);
        assert_eq!(garden.get(Position::new(3, GARDEN_WIDTH)), None);
        assert_eq!(garden.at(Position::new(GARDEN_HEIGHT, 0)), Occupant::Wall);
    }

    #[test]
    fn test_walls_cannot_be_overwritten() {
        let mut garden = Garden::new();
        assert!(!garden.set(Position::new(0, 4), Occupant::Blank));
        assert!(!garden.set(Position::new(-2, 4), Occupant::Blank));
        assert_eq!(garden.at(Position::new(0, 4)), Occupant::Wall);

        assert!(garden.set(Position::new(4, 4), Occupant::Lettuce));
        assert!(garden.is(Position::new(4, 4), Occupant::Lettuce));
    }

    #[test]
    fn test_count_and_positions() {
        let mut garden = Garden::new();
        garden.set(Position::new(2, 3), Occupant::Pellet);
        garden.set(Position::new(7, 1), Occupant::Pellet);

        assert_eq!(garden.count(Occupant::Pellet), 2);
        let found: Vec<_> = garden.positions_of(Occupant::Pellet).collect();
        assert_eq!(found, vec![Position::new(2, 3), Position::new(7, 1)]);

        let interior = (GARDEN_HEIGHT as usize - 2) * (GARDEN_WIDTH as usize - 2);
        assert_eq!(garden.count(Occupant::Blank), interior - 2);
    }

    #[test]
    fn test_to_lines_uses_glyphs() {
        let mut garden = Garden::new();
        garden.set(Position::new(1, 1), Occupant::Snail);
        let lines = garden.to_lines();
        assert_eq!(lines.len(), GARDEN_HEIGHT as usize);
        assert_eq!(lines[0], "+".repeat(GARDEN_WIDTH as usize));
        assert!(lines[1].starts_with("+&"));
    }
}
