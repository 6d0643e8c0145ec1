//! Board coordinates.

use crate::Direction;

/// A `(row, column)` coordinate.
///
/// Row 0 is the goal edge and the last row is the start edge. Coordinates are
/// signed so that a position can leave the board: row [`DEPARTED_ROW`]
/// marks a player who has stepped past the goal edge.
///
/// [`DEPARTED_ROW`]: Position::DEPARTED_ROW
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::Up), Position::new(1, 3));
/// assert_eq!(pos.translated(1, -1), Position::new(3, 2));
/// assert!(Position::new(0, 1).step(Direction::Up).is_departed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Row value of a player who has left the board across the goal edge.
    pub const DEPARTED_ROW: i32 = -1;

    /// Creates a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Moves this position in place by the given delta.
    pub const fn translate(&mut self, d_row: i32, d_col: i32) {
        self.row += d_row;
        self.col += d_col;
    }

    /// Returns this position moved by the given delta.
    #[must_use]
    pub const fn translated(mut self, d_row: i32, d_col: i32) -> Self {
        self.translate(d_row, d_col);
        self
    }

    /// Returns the neighboring position one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.delta();
        self.translated(d_row, d_col)
    }

    /// Returns `true` if this is the pseudo-position past the goal edge.
    #[must_use]
    pub const fn is_departed(self) -> bool {
        self.row == Self::DEPARTED_ROW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut pos = Position::new(1, 1);
        pos.translate(-1, 2);
        assert_eq!(pos, Position::new(0, 3));
        assert_eq!(pos.row(), 0);
        assert_eq!(pos.col(), 3);
    }

    #[test]
    fn test_step_and_back() {
        let pos = Position::new(4, 4);
        for dir in Direction::ALL {
            assert_ne!(pos.step(dir), pos);
            assert_eq!(pos.step(dir).step(dir.opposite()), pos);
        }
    }

    #[test]
    fn test_departed() {
        assert!(!Position::new(0, 0).is_departed());
        assert!(Position::new(0, 0).step(Direction::Up).is_departed());
        assert_eq!(Position::new(-1, 5).to_string(), "(-1, 5)");
    }
}
