//! Interactive play on generated Boulder boards.
//!
//! A [`Game`] owns a [`SolvedBoard`](boulder_generator::SolvedBoard), lets the
//! player walk and push on a live copy of its grid, and can be reset to the
//! generated layout at any time.

pub use self::{error::GameError, game::Game, step::StepOutcome};

mod error;
mod game;
mod step;
