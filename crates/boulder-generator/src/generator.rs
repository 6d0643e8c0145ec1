//! Random board generation.

use boulder_core::{Cell, Grid, GridShapeError, Position};
use boulder_solver::{PushSolver, Solution};
use rand::RngExt;

use crate::{BoardSeed, Difficulty};

/// Validated board dimensions.
///
/// # Examples
///
/// ```
/// use boulder_generator::BoardSize;
///
/// let size = BoardSize::new(6, 4)?;
/// assert_eq!((size.width(), size.height()), (6, 4));
/// assert_eq!(size.candidate_cells(), 18);
/// assert!(BoardSize::new(0, 4).is_err());
/// # Ok::<(), boulder_core::GridShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSize {
    blank: Grid,
}

impl BoardSize {
    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`GridShapeError`] if the dimensions cannot form a grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridShapeError> {
        Ok(Self {
            blank: Grid::new(width, height)?,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.blank.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.blank.height()
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> usize {
        self.blank.area()
    }

    /// Returns the number of cells that may hold a boulder.
    ///
    /// The start row is always left empty, so this is `width * (height - 1)`.
    #[must_use]
    pub fn candidate_cells(&self) -> usize {
        self.width() * (self.height() - 1)
    }

    /// Returns an all-empty grid of this size.
    #[must_use]
    pub fn blank_grid(&self) -> Grid {
        self.blank.clone()
    }
}

/// A generated board together with the solution the solver found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedBoard {
    /// The board layout.
    pub grid: Grid,
    /// A push sequence that solves `grid`.
    pub solution: Solution,
    /// The seed `grid` was generated from.
    pub seed: BoardSeed,
}

impl SolvedBoard {
    /// Returns the number of pushes the solution needs.
    #[must_use]
    pub fn moves_needed(&self) -> usize {
        self.solution.move_count()
    }
}

/// Returns how many boulders a board of `size` gets at `difficulty`.
///
/// The fill ratio is `1/2 + (difficulty - 5) / 20` of the candidate cells,
/// rounded down: 30% at difficulty 1, 75% at difficulty 10.
///
/// # Examples
///
/// ```
/// use boulder_generator::{BoardSize, Difficulty, target_block_count};
///
/// let size = BoardSize::new(5, 5)?;
/// assert_eq!(target_block_count(&size, Difficulty::new(5).unwrap()), 10);
/// assert_eq!(target_block_count(&size, Difficulty::MAX), 15);
/// # Ok::<(), boulder_core::GridShapeError>(())
/// ```
#[must_use]
pub fn target_block_count(size: &BoardSize, difficulty: Difficulty) -> usize {
    let candidates = size.candidate_cells();
    (candidates * (usize::from(difficulty.value()) + 5) / 20).min(candidates)
}

/// Builds a random layout with exactly [`target_block_count`] boulders.
///
/// Each candidate cell is first filled independently with the target
/// probability. Random boulders are then removed or added until the count
/// matches the target. The start row is never filled.
pub fn random_layout<R>(size: &BoardSize, difficulty: Difficulty, rng: &mut R) -> Grid
where
    R: RngExt,
{
    let mut grid = size.blank_grid();
    let start_row = grid.start_row();
    let candidates = grid
        .positions()
        .filter(|pos| usize::try_from(pos.row()).is_ok_and(|row| row < start_row))
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return grid;
    }

    let target = target_block_count(size, difficulty);
    #[expect(clippy::cast_precision_loss)]
    let probability = target as f64 / candidates.len() as f64;
    let (mut filled, mut free): (Vec<Position>, Vec<Position>) = candidates
        .into_iter()
        .partition(|_| rng.random_bool(probability));

    while filled.len() > target {
        let i = rng.random_range(0..filled.len());
        free.push(filled.swap_remove(i));
    }
    while filled.len() < target {
        let i = rng.random_range(0..free.len());
        filled.push(free.swap_remove(i));
    }

    for pos in filled {
        grid.set(pos, Cell::Block);
    }
    grid
}

/// Generates random boards and keeps the ones that match a difficulty.
///
/// A layout is accepted when the solver finds a solution that needs at least
/// one push and at least [`Difficulty::min_move_count`] pushes.
///
/// # Examples
///
/// ```
/// use boulder_generator::{BoardGenerator, BoardSeed, BoardSize, Difficulty};
/// use boulder_solver::PushSolver;
///
/// let solver = PushSolver::new();
/// let generator = BoardGenerator::new(&solver);
/// let size = BoardSize::new(5, 5)?;
///
/// let seed = BoardSeed::random();
/// if let Some(board) = generator.generate_with_seed(&size, Difficulty::MIN, seed) {
///     assert!(board.moves_needed() >= 1);
///     assert_eq!(board.seed, seed);
/// }
/// # Ok::<(), boulder_core::GridShapeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    solver: &'a PushSolver,
}

impl<'a> BoardGenerator<'a> {
    /// Creates a generator that checks its layouts with `solver`.
    #[must_use]
    pub fn new(solver: &'a PushSolver) -> Self {
        Self { solver }
    }

    /// Returns the solver used to check layouts.
    #[must_use]
    pub fn solver(&self) -> &'a PushSolver {
        self.solver
    }

    /// Makes one generation attempt with a random seed.
    ///
    /// Returns `None` if the layout is rejected.
    #[must_use]
    pub fn generate(&self, size: &BoardSize, difficulty: Difficulty) -> Option<SolvedBoard> {
        self.generate_with_seed(size, difficulty, BoardSeed::random())
    }

    /// Makes one generation attempt with the given seed.
    ///
    /// The same seed, size and difficulty always produce the same layout.
    /// Returns `None` if the layout is unsolvable within the solver's budget
    /// or needs too few pushes.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        size: &BoardSize,
        difficulty: Difficulty,
        seed: BoardSeed,
    ) -> Option<SolvedBoard> {
        let mut rng = seed.rng();
        let grid = random_layout(size, difficulty, &mut rng);

        let Some(solution) = self.solver.solve(&grid) else {
            log::trace!("rejected {seed}: unsolvable");
            return None;
        };
        let moves = solution.move_count();
        if moves == 0 || moves < difficulty.min_move_count() {
            log::trace!("rejected {seed}: {moves} pushes at difficulty {difficulty}");
            return None;
        }

        log::debug!("accepted {seed}: {moves} pushes at difficulty {difficulty}");
        Some(SolvedBoard {
            grid,
            solution,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use boulder_solver::solution_steps;
    use proptest::prelude::*;

    use super::*;

    fn size(width: usize, height: usize) -> BoardSize {
        BoardSize::new(width, height).unwrap()
    }

    fn difficulty(value: u8) -> Difficulty {
        Difficulty::new(value).unwrap()
    }

    #[test]
    fn test_board_size_rejects_huge_boards() {
        assert!(matches!(
            BoardSize::new(100_000, 100_000),
            Err(GridShapeError::TooLarge { .. })
        ));
        assert!(BoardSize::new(0, 5).is_err());
        assert_eq!(size(1024, 1024).area(), Grid::MAX_AREA);
    }

    #[test]
    fn test_target_block_count() {
        let s = size(4, 4);
        assert_eq!(s.candidate_cells(), 12);
        assert_eq!(target_block_count(&s, difficulty(1)), 3);
        assert_eq!(target_block_count(&s, difficulty(3)), 4);
        assert_eq!(target_block_count(&s, difficulty(5)), 6);
        assert_eq!(target_block_count(&s, difficulty(10)), 9);

        let single_row = size(7, 1);
        assert_eq!(single_row.candidate_cells(), 0);
        assert_eq!(target_block_count(&single_row, Difficulty::MAX), 0);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let solver = PushSolver::new();
        let generator = BoardGenerator::new(&solver);
        let s = size(5, 5);
        let base = BoardSeed::from_bytes([7; 32]);
        for i in 0..32 {
            let seed = base.derive(i);
            let a = generator.generate_with_seed(&s, difficulty(4), seed);
            let b = generator.generate_with_seed(&s, difficulty(4), seed);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_accepted_boards_meet_difficulty() {
        let solver = PushSolver::new();
        let generator = BoardGenerator::new(&solver);
        let s = size(4, 4);
        let d = difficulty(3);
        let base = BoardSeed::from_bytes([42; 32]);

        let accepted = (0..200)
            .filter_map(|i| generator.generate_with_seed(&s, d, base.derive(i)))
            .collect::<Vec<_>>();
        assert!(!accepted.is_empty());

        for board in accepted {
            assert!(board.moves_needed() >= 1);
            assert!(board.moves_needed() >= d.min_move_count());
            assert_eq!(board.grid.block_count(), target_block_count(&s, d));
            let steps = solution_steps(&board.grid, board.solution.moves()).unwrap();
            assert!(!steps.is_empty());
        }
    }

    #[test]
    fn test_single_row_boards_are_rejected() {
        let solver = PushSolver::new();
        let generator = BoardGenerator::new(&solver);
        let s = size(5, 1);
        for i in 0..8 {
            let seed = BoardSeed::from_bytes([1; 32]).derive(i);
            assert_eq!(generator.generate_with_seed(&s, Difficulty::MAX, seed), None);
        }
    }

    proptest! {
        #[test]
        fn test_layout_has_exact_block_count(
            width in 1usize..8,
            height in 1usize..8,
            value in 1u8..=10,
            bytes in any::<[u8; 32]>(),
        ) {
            let s = size(width, height);
            let d = difficulty(value);
            let grid = random_layout(&s, d, &mut BoardSeed::from_bytes(bytes).rng());

            prop_assert_eq!(grid.block_count(), target_block_count(&s, d));
            let start_row = grid.rows().last().unwrap();
            prop_assert!(start_row.iter().all(|cell| cell.is_empty()));
        }
    }
}
