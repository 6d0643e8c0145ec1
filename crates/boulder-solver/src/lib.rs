//! Push-state solver for Boulder boards.
//!
//! [`PushSolver`] runs a bounded breadth-first search over boulder layouts and
//! returns a short (not necessarily shortest) push sequence that lets the
//! player leave the board across the goal edge.
//!
//! The move rules live in [`can_push`], [`push_block`] and
//! [`apply_player_move`]; the last one is also what interactive play uses, so
//! every solution can be replayed step by step with [`solution_steps`].
//!
//! # Examples
//!
//! ```
//! use boulder_core::Grid;
//! use boulder_solver::{PushSolver, SolverConfig};
//!
//! let grid: Grid = "
//!     .#..
//!     ###.#
//!     .#..
//!     ....
//! "
//! .parse()?;
//!
//! let solver = PushSolver::with_config(SolverConfig::default());
//! let mut stats = solver.new_stats();
//! if let Some(solution) = solver.solve_with_stats(&grid, &mut stats) {
//!     println!("{} pushes ({stats})", solution.move_count());
//! }
//! # Ok::<(), boulder_core::GridParseError>(())
//! ```

pub use self::{
    deadline::Deadline,
    push::{apply_player_move, can_push, push_block},
    replay::solution_steps,
    route::Route,
    solver::{PushSolver, Solution, SolverConfig, SolverStats, StopReason},
};

mod deadline;
mod push;
mod replay;
mod route;
mod solver;
mod walk;
