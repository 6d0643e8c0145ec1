//! Time-bounded search for the hardest board of a requested difficulty.

use std::time::Duration;

use boulder_core::{Cell, Position};
use boulder_solver::{Deadline, PushSolver};

use crate::{BoardGenerator, BoardSeed, BoardSize, Difficulty, SolvedBoard};

/// Tuning knobs for [`BoardRefiner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefinerConfig {
    backoff_area_budget: usize,
    stop_on_unsolvable: bool,
}

impl RefinerConfig {
    /// Default value of [`backoff_area_budget`](Self::backoff_area_budget).
    pub const DEFAULT_BACKOFF_AREA_BUDGET: usize = 40_000;

    /// Sets the budget that decides how often the difficulty is lowered.
    ///
    /// After every `max(1, budget / (width * height))` rejected attempts the
    /// requested difficulty drops by one, down to [`Difficulty::MIN`].
    #[must_use]
    pub fn with_backoff_area_budget(mut self, budget: usize) -> Self {
        self.backoff_area_budget = budget;
        self
    }

    /// Sets whether hardening ends at the first boulder that makes the board
    /// unsolvable.
    ///
    /// When `false`, such a boulder is removed again and the scan goes on.
    #[must_use]
    pub fn with_stop_on_unsolvable(mut self, stop: bool) -> Self {
        self.stop_on_unsolvable = stop;
        self
    }

    /// Returns the backoff area budget.
    #[must_use]
    pub fn backoff_area_budget(&self) -> usize {
        self.backoff_area_budget
    }

    /// Returns whether hardening ends at the first unsolvable board.
    #[must_use]
    pub fn stop_on_unsolvable(&self) -> bool {
        self.stop_on_unsolvable
    }

    /// Returns how many rejected attempts trigger one difficulty backoff.
    #[must_use]
    pub fn backoff_interval(&self, size: &BoardSize) -> usize {
        (self.backoff_area_budget / size.area()).max(1)
    }
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            backoff_area_budget: Self::DEFAULT_BACKOFF_AREA_BUDGET,
            stop_on_unsolvable: true,
        }
    }
}

/// Counters collected by [`BoardRefiner::create_best_with_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinerStats {
    attempts: usize,
    backoffs: usize,
    difficulty: Option<Difficulty>,
    hardening: Vec<usize>,
}

impl RefinerStats {
    /// Returns the number of generation attempts.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns how many times the difficulty was lowered.
    #[must_use]
    pub fn backoffs(&self) -> usize {
        self.backoffs
    }

    /// Returns the difficulty in effect when the search ended.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Returns the push count of every board accepted while hardening, in
    /// order.
    ///
    /// Each entry is strictly greater than the one before it.
    #[must_use]
    pub fn hardening(&self) -> &[usize] {
        &self.hardening
    }
}

/// Searches for a solvable board and then makes it harder.
///
/// The search runs in two phases under one deadline:
///
/// 1. Generate random boards until one is accepted. Every
///    [`RefinerConfig::backoff_interval`] rejections the difficulty is
///    lowered by one.
/// 2. Scan the non-start cells in row-major order and try adding a boulder to
///    each empty one. A board whose solution needs more pushes replaces the
///    current one and the scan starts over. The phase ends after a scan with
///    no improvement, on the first unsolvable board (see
///    [`RefinerConfig::with_stop_on_unsolvable`]) or at the deadline.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use boulder_generator::{BoardRefiner, BoardSize, Difficulty};
/// use boulder_solver::PushSolver;
///
/// let solver = PushSolver::new();
/// let refiner = BoardRefiner::new(&solver);
/// let size = BoardSize::new(4, 4)?;
///
/// if let Some(board) = refiner.create_best(&size, Difficulty::MIN, Duration::from_millis(500)) {
///     assert!(board.moves_needed() >= 1);
/// }
/// # Ok::<(), boulder_core::GridShapeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardRefiner<'a> {
    generator: BoardGenerator<'a>,
    config: RefinerConfig,
}

impl<'a> BoardRefiner<'a> {
    /// Creates a refiner with the default configuration.
    #[must_use]
    pub fn new(solver: &'a PushSolver) -> Self {
        Self::with_config(solver, RefinerConfig::default())
    }

    /// Creates a refiner with the given configuration.
    #[must_use]
    pub fn with_config(solver: &'a PushSolver, config: RefinerConfig) -> Self {
        Self {
            generator: BoardGenerator::new(solver),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RefinerConfig {
        &self.config
    }

    /// Runs the search with a random seed.
    ///
    /// Returns `None` if no board was accepted before `duration` elapsed.
    #[must_use]
    pub fn create_best(
        &self,
        size: &BoardSize,
        difficulty: Difficulty,
        duration: Duration,
    ) -> Option<SolvedBoard> {
        self.create_best_with_seed(size, difficulty, duration, BoardSeed::random())
    }

    /// Runs the search with the given seed.
    ///
    /// Attempt `n` uses `seed.derive(n)`, so with a generous `duration` the
    /// result depends only on the arguments.
    #[must_use]
    pub fn create_best_with_seed(
        &self,
        size: &BoardSize,
        difficulty: Difficulty,
        duration: Duration,
        seed: BoardSeed,
    ) -> Option<SolvedBoard> {
        let mut stats = RefinerStats::default();
        self.create_best_with_stats(size, difficulty, duration, seed, &mut stats)
    }

    /// Runs the search with the given seed and records counters in `stats`.
    pub fn create_best_with_stats(
        &self,
        size: &BoardSize,
        difficulty: Difficulty,
        duration: Duration,
        seed: BoardSeed,
        stats: &mut RefinerStats,
    ) -> Option<SolvedBoard> {
        let deadline = Deadline::after(duration);
        let interval = self.config.backoff_interval(size);
        let mut difficulty = difficulty;
        let mut rejected = 0;
        let mut attempt = 0;
        stats.difficulty = Some(difficulty);

        let board = loop {
            if deadline.is_expired() {
                log::debug!(
                    "no board accepted after {} attempts ({} backoffs)",
                    stats.attempts,
                    stats.backoffs
                );
                return None;
            }
            let attempt_seed = seed.derive(attempt);
            attempt += 1;
            stats.attempts += 1;
            if let Some(board) = self
                .generator
                .generate_with_seed(size, difficulty, attempt_seed)
            {
                break board;
            }
            rejected += 1;
            if rejected % interval == 0
                && let Some(easier) = difficulty.easier()
            {
                log::debug!("backing off to difficulty {easier} after {rejected} rejections");
                difficulty = easier;
                stats.backoffs += 1;
                stats.difficulty = Some(difficulty);
            }
        };

        log::debug!(
            "base board {} needs {} pushes (attempt {attempt})",
            board.seed,
            board.moves_needed()
        );
        if deadline.is_expired() {
            return Some(board);
        }
        Some(self.harden(board, &deadline, stats))
    }

    /// Adds boulders to `board` while that makes its solution longer.
    ///
    /// This is the second phase of
    /// [`create_best_with_stats`](Self::create_best_with_stats).
    pub fn harden(
        &self,
        mut board: SolvedBoard,
        deadline: &Deadline,
        stats: &mut RefinerStats,
    ) -> SolvedBoard {
        let solver = self.generator.solver();
        let start_row = board.grid.start_row();

        'scan: loop {
            let candidates = board
                .grid
                .positions()
                .filter(|pos| usize::try_from(pos.row()).is_ok_and(|row| row < start_row))
                .collect::<Vec<Position>>();
            let mut grid = board.grid.clone();

            for pos in candidates {
                if deadline.is_expired() {
                    log::debug!("hardening stopped at the deadline");
                    break 'scan;
                }
                if grid.is_block(pos) {
                    continue;
                }
                grid.set(pos, Cell::Block);
                match solver.solve(&grid) {
                    Some(solution) if solution.move_count() > board.moves_needed() => {
                        log::debug!(
                            "boulder at {pos}: {} -> {} pushes",
                            board.moves_needed(),
                            solution.move_count()
                        );
                        stats.hardening.push(solution.move_count());
                        board.grid = grid;
                        board.solution = solution;
                        continue 'scan;
                    }
                    None if self.config.stop_on_unsolvable => {
                        log::debug!("hardening stopped: boulder at {pos} makes the board unsolvable");
                        break 'scan;
                    }
                    _ => {
                        grid.set(pos, Cell::Empty);
                    }
                }
            }
            break;
        }
        board
    }
}

/// Generates the hardest board found for `difficulty` within `duration`.
///
/// Shorthand for [`BoardRefiner::create_best`] with a default
/// [`PushSolver`].
#[must_use]
pub fn generate_solved_board(
    size: &BoardSize,
    difficulty: Difficulty,
    duration: Duration,
) -> Option<SolvedBoard> {
    let solver = PushSolver::new();
    BoardRefiner::new(&solver).create_best(size, difficulty, duration)
}
