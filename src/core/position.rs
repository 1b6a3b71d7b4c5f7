//! Grid coordinates.
//!
//! The board is a fixed 4x13 grid. Rows are independent runs; column 0 is
//! the left edge where only a Two may seed a row.
//!
//! ```
//! use gaps::core::Position;
//!
//! let cells: Vec<_> = Position::all().collect();
//! assert_eq!(cells.len(), 52);
//! assert_eq!(cells[13], Position::new(1, 0));
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 4;

/// Number of columns on the board.
pub const COLS: usize = 13;

/// A cell on the board, addressed by row then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if the cell is outside the 4x13 grid.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < ROWS, "row {} out of range", row);
        assert!(col < COLS, "col {} out of range", col);
        Self { row, col }
    }

    /// Create a position, or `None` if it is off the grid.
    #[must_use]
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// The cell immediately to the left, if any.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self { row: self.row, col })
    }

    /// The cell immediately to the right, if any.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        Self::checked(self.row, self.col + 1)
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
    }

    /// Every cell of one row, left to right.
    pub fn row(row: usize) -> impl Iterator<Item = Position> {
        (0..COLS).map(move |col| Position::new(row, col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
