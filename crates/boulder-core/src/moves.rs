//! Push records.

use crate::{Direction, Position};

/// A single push: which boulder moved and in which direction.
///
/// The position is the boulder's cell *before* the push, which is also where
/// the player stands right after it. Moves are immutable once created.
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Move, Position};
///
/// let push = Move::new(Position::new(2, 1), Direction::Up);
/// assert_eq!(push.destination(), Position::new(1, 1));
/// assert_eq!(push.player_position(), Position::new(3, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{block} {direction}")]
pub struct Move {
    block: Position,
    direction: Direction,
}

impl Move {
    /// Creates a push record.
    #[must_use]
    pub const fn new(block: Position, direction: Direction) -> Self {
        Self { block, direction }
    }

    /// Returns the boulder's position before the push.
    #[must_use]
    pub const fn block(self) -> Position {
        self.block
    }

    /// Returns the push direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Returns where the boulder ends up.
    #[must_use]
    pub const fn destination(self) -> Position {
        self.block.step(self.direction)
    }

    /// Returns the cell the player must stand on to perform this push.
    #[must_use]
    pub const fn player_position(self) -> Position {
        self.block.step(self.direction.opposite())
    }
}
