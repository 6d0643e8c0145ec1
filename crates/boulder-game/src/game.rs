use boulder_core::{Direction, Grid, Position};
use boulder_generator::SolvedBoard;
use boulder_solver::{Solution, apply_player_move};

use crate::{GameError, StepOutcome};

/// A Boulder game session.
///
/// The generated board is kept untouched; steps are applied to a live copy of
/// its grid. The game is solved once the player has stepped past the goal
/// edge.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use boulder_game::Game;
/// use boulder_generator::{BoardSize, Difficulty, generate_solved_board};
///
/// let size = BoardSize::new(5, 5)?;
/// if let Some(board) = generate_solved_board(&size, Difficulty::MIN, Duration::from_millis(300)) {
///     let mut game = Game::new(board);
///     for dir in game.solution_steps().unwrap() {
///         game.step(dir).unwrap();
///     }
///     assert!(game.is_solved());
/// }
/// # Ok::<(), boulder_core::GridShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: SolvedBoard,
    grid: Grid,
    player: Position,
    steps_taken: usize,
    pushes_made: usize,
}

impl Game {
    /// Starts a game on `board` with the player on the start cell.
    #[must_use]
    pub fn new(board: SolvedBoard) -> Self {
        let grid = board.grid.clone();
        let player = grid.start_position();
        Self {
            board,
            grid,
            player,
            steps_taken: 0,
            pushes_made: 0,
        }
    }

    /// Returns the board as it was generated.
    #[must_use]
    pub fn board(&self) -> &SolvedBoard {
        &self.board
    }

    /// Returns the live grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player position. The row is negative once the player has
    /// left the board.
    #[must_use]
    pub fn player(&self) -> Position {
        self.player
    }

    /// Returns the number of accepted steps since the last reset.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Returns the number of pushes since the last reset.
    #[must_use]
    pub fn pushes_made(&self) -> usize {
        self.pushes_made
    }

    /// Returns the number of pushes the known solution needs.
    #[must_use]
    pub fn moves_needed(&self) -> usize {
        self.board.moves_needed()
    }

    /// Returns the known solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.board.solution
    }

    /// Expands the known solution into player steps from the start cell.
    ///
    /// Returns `None` only if the stored solution does not fit the board.
    #[must_use]
    pub fn solution_steps(&self) -> Option<Vec<Direction>> {
        boulder_solver::solution_steps(&self.board.grid, self.board.solution.moves())
    }

    /// Returns `true` once the player has left the board across the goal
    /// edge.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.player.is_departed()
    }

    /// Moves the player one cell in `dir`, pushing a boulder if one is in
    /// the way.
    ///
    /// A blocked step is not an error; it returns
    /// [`StepOutcome::Rejected`] and leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the player has already left
    /// the board.
    pub fn step(&mut self, dir: Direction) -> Result<StepOutcome, GameError> {
        if self.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        let pushing = self.grid.is_block(self.player.step(dir));
        if !apply_player_move(&mut self.player, dir, &mut self.grid) {
            return Ok(StepOutcome::Rejected);
        }

        self.steps_taken += 1;
        let outcome = if self.is_solved() {
            StepOutcome::Departed
        } else if pushing {
            self.pushes_made += 1;
            StepOutcome::Pushed
        } else {
            StepOutcome::Walked
        };
        log::trace!("step {dir}: {outcome}, player at {}", self.player);
        if outcome.is_departed() {
            log::debug!(
                "solved in {} steps and {} pushes ({} needed)",
                self.steps_taken,
                self.pushes_made,
                self.moves_needed()
            );
        }
        Ok(outcome)
    }

    /// Restores the generated layout and puts the player back on the start
    /// cell.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.board.grid);
        self.player = self.grid.start_position();
        self.steps_taken = 0;
        self.pushes_made = 0;
    }
}

#[cfg(test)]
mod tests {
    use boulder_generator::BoardSeed;
    use boulder_solver::PushSolver;

    use super::*;

    fn game(text: &str) -> Game {
        let grid: Grid = text.parse().unwrap();
        let solution = PushSolver::new().solve(&grid).unwrap();
        Game::new(SolvedBoard {
            grid,
            solution,
            seed: BoardSeed::from_bytes([0; 32]),
        })
    }

    #[test]
    fn test_new_game_starts_at_start_cell() {
        let game = game("#.#\n.#.\n...");
        assert_eq!(game.player(), Position::new(2, 0));
        assert_eq!(game.grid(), &game.board().grid);
        assert_eq!(game.moves_needed(), 1);
        assert_eq!(game.steps_taken(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_step_outcomes() {
        let mut game = game("#.#\n.#.\n...");

        assert_eq!(game.step(Direction::Left), Ok(StepOutcome::Rejected));
        assert_eq!(game.step(Direction::Down), Ok(StepOutcome::Rejected));
        assert_eq!(game.steps_taken(), 0);

        assert_eq!(game.step(Direction::Up), Ok(StepOutcome::Walked));
        assert_eq!(game.player(), Position::new(1, 0));
        // the goal row cell above is a boulder and cannot be pushed
        assert_eq!(game.step(Direction::Up), Ok(StepOutcome::Rejected));

        assert_eq!(game.step(Direction::Right), Ok(StepOutcome::Pushed));
        assert_eq!(game.player(), Position::new(1, 1));
        assert!(game.grid().is_block(Position::new(1, 2)));
        assert_eq!(game.pushes_made(), 1);

        assert_eq!(game.step(Direction::Up), Ok(StepOutcome::Walked));
        assert_eq!(game.player(), Position::new(0, 1));
        assert_eq!(game.step(Direction::Up), Ok(StepOutcome::Departed));
        assert!(game.is_solved());
        assert_eq!(game.steps_taken(), 4);

        assert_eq!(game.step(Direction::Down), Err(GameError::AlreadySolved));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut game = game("#.#\n.#.\n...");
        game.step(Direction::Up).unwrap();
        game.step(Direction::Right).unwrap();
        assert_ne!(game.grid(), &game.board().grid);

        game.reset();
        assert_eq!(game.grid(), &game.board().grid);
        assert_eq!(game.player(), game.grid().start_position());
        assert_eq!(game.steps_taken(), 0);
        assert_eq!(game.pushes_made(), 0);
    }

    #[test]
    fn test_solution_steps_win_the_game() {
        for text in ["#.#\n.#.\n...", "..#\n##.\n...", "...\n###\n..."] {
            let mut game = game(text);
            let steps = game.solution_steps().unwrap();
            let mut outcomes = Vec::new();
            for dir in steps {
                outcomes.push(game.step(dir).unwrap());
            }
            assert!(game.is_solved(), "{text}");
            assert_eq!(outcomes.last(), Some(&StepOutcome::Departed));
            assert!(!outcomes.iter().any(|outcome| outcome.is_rejected()));
            assert_eq!(game.pushes_made(), game.moves_needed());
        }
    }
}
