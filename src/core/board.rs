//! The 6×6 game board.
//!
//! Cells transition one way within a game:
//! - `Empty → Star` when Player 1 places a marker.
//! - `Empty → Circle` when a projected ray crosses the cell.
//!
//! `Star` and `Circle` cells are never altered once set; rays pass through
//! non-empty cells without touching them, so overlapping rays are idempotent.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Board side length. The grid is always `BOARD_SIZE × BOARD_SIZE`.
pub const BOARD_SIZE: usize = 6;

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Star,
    Circle,
}

impl Cell {
    /// Check whether this cell is still unclaimed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A bounds-checked board coordinate.
///
/// Row 0 is the top edge; rows increase downward. A `Position` can only be
/// constructed for coordinates inside the grid, so lookups never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position, returning `None` if it falls outside the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Step one cell in `direction`, returning `None` at the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.vector();
        let row = self.row as i32 + i32::from(dr);
        let col = self.col as i32 + i32::from(dc);
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 6×6 grid of cells.
///
/// Fixed-size arrays keep the board `Copy`, which makes history snapshots
/// deep by construction: a snapshot never shares cells with the live board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Set the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Iterate over all positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    /// Positions of all stars, in row-major order.
    pub fn stars(&self) -> impl Iterator<Item = Position> + '_ {
        Self::positions().filter(move |&pos| self.cell(pos) == Cell::Star)
    }

    /// Count cells still empty.
    #[must_use]
    pub fn count_empty(&self) -> u32 {
        Self::positions()
            .filter(|&pos| self.cell(pos).is_empty())
            .count() as u32
    }

    /// Count placed stars.
    #[must_use]
    pub fn count_stars(&self) -> u32 {
        self.stars().count() as u32
    }

    /// Project a ray from `from` along `direction`, converting every empty
    /// cell it crosses to a circle until the walk exits the board.
    ///
    /// Non-empty cells are passed through untouched. The origin cell itself
    /// is not modified. Returns the number of cells filled.
    pub fn fill_ray(&mut self, from: Position, direction: Direction) -> u32 {
        let mut filled = 0;
        let mut cursor = from;
        while let Some(next) = cursor.step(direction) {
            if self.cell(next).is_empty() {
                self.set(next, Cell::Circle);
                filled += 1;
            }
            cursor = next;
        }
        filled
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => '.',
                    Cell::Star => '*',
                    Cell::Circle => 'o',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
