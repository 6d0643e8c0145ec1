//! Board generation for Boulder.
//!
//! [`BoardGenerator`] draws random layouts whose boulder density follows the
//! requested [`Difficulty`] and keeps the ones the solver accepts.
//! [`BoardRefiner`] repeats that under a time limit, backing off to easier
//! difficulties when nothing is accepted, and then adds boulders one by one
//! while that makes the solution longer.
//!
//! Every board carries the [`BoardSeed`] it was generated from, so a layout
//! can be regenerated from its seed.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use boulder_generator::{BoardSize, Difficulty, generate_solved_board};
//!
//! let size = BoardSize::new(5, 5)?;
//! if let Some(board) = generate_solved_board(&size, Difficulty::MIN, Duration::from_millis(300)) {
//!     println!("seed {}", board.seed);
//!     println!("{}", board.grid);
//!     println!("{} pushes", board.moves_needed());
//! }
//! # Ok::<(), boulder_core::GridShapeError>(())
//! ```

pub use self::{
    difficulty::{Difficulty, DifficultyError},
    generator::{BoardGenerator, BoardSize, SolvedBoard, random_layout, target_block_count},
    refiner::{BoardRefiner, RefinerConfig, RefinerStats, generate_solved_board},
    seed::{BoardSeed, SeedParseError},
};

mod difficulty;
mod generator;
mod refiner;
mod seed;
