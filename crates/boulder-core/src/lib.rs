//! Core data structures for the Boulder puzzle.
//!
//! A Boulder board is a rectangle of empty cells and boulders. The player
//! starts at the first column of the bottom row and wins by leaving the board
//! across the top row, pushing boulders one cell at a time out of the way.
//!
//! This crate holds the plain data shared by the solver, the generator and
//! the game:
//!
//! - [`Cell`], [`Grid`]: the board layout and its text format
//! - [`Position`], [`Direction`]: coordinates and movement
//! - [`Move`]: a single push
//! - [`hash`]: layout hashing used to deduplicate search states
//!
//! # Examples
//!
//! ```
//! use boulder_core::{Cell, Direction, Grid, Move, Position};
//!
//! let mut grid = Grid::new(3, 3)?;
//! grid.set(Position::new(1, 1), Cell::Block);
//!
//! let push = Move::new(Position::new(1, 1), Direction::Up);
//! assert_eq!(push.destination(), Position::new(0, 1));
//! assert_eq!(grid.block_count(), 1);
//! # Ok::<(), boulder_core::GridShapeError>(())
//! ```

pub use self::{
    cell::Cell,
    direction::Direction,
    grid::{Grid, GridParseError, GridShapeError},
    moves::Move,
    position::Position,
};

mod cell;
mod direction;
mod grid;
pub mod hash;
mod moves;
mod position;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
