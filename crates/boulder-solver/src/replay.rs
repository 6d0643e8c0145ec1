use boulder_core::{Direction, Grid, Move};

use crate::{push, walk};

/// Expands a push sequence into the player steps that perform it.
///
/// Starting from `grid`'s start position, the player walks the shortest way to
/// the cell behind each boulder, pushes it, and after the last push walks to
/// the goal row and steps up past the goal edge. Every returned step is legal
/// for [`apply_player_move`](crate::apply_player_move) when replayed in order
/// on a copy of `grid`.
///
/// Returns `None` if some push cannot be reached or is not legal, which never
/// happens for a sequence returned by [`PushSolver`](crate::PushSolver) on the
/// same grid.
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Grid};
/// use boulder_solver::{PushSolver, apply_player_move, solution_steps};
///
/// let grid: Grid = "
///     #.#
///     .#.
///     ...
/// "
/// .parse()?;
/// let solution = PushSolver::new().solve(&grid).expect("solvable");
/// let steps = solution_steps(&grid, solution.moves()).expect("replayable");
///
/// let mut live = grid.clone();
/// let mut player = live.start_position();
/// for step in steps {
///     assert!(apply_player_move(&mut player, step, &mut live));
/// }
/// assert!(player.is_departed());
/// # Ok::<(), boulder_core::GridParseError>(())
/// ```
#[must_use]
pub fn solution_steps(grid: &Grid, moves: &[Move]) -> Option<Vec<Direction>> {
    let mut grid = grid.clone();
    let mut player = grid.start_position();
    let mut steps = Vec::new();

    for mv in moves {
        let stand = mv.player_position();
        let walk = walk::find_walk(&grid, player, |pos| pos == stand)?;
        for dir in walk.into_iter().chain([mv.direction()]) {
            if !push::apply_player_move(&mut player, dir, &mut grid) {
                return None;
            }
            steps.push(dir);
        }
    }

    let walk = walk::find_walk(&grid, player, |pos| pos.row() == 0)?;
    for dir in walk.into_iter().chain([Direction::Up]) {
        if !push::apply_player_move(&mut player, dir, &mut grid) {
            return None;
        }
        steps.push(dir);
    }
    Some(steps)
}

#[cfg(test)]
mod tests {
    use boulder_core::{Position, testing::arb_playable_grid};
    use proptest::prelude::*;

    use super::*;
    use crate::{PushSolver, SolverConfig, apply_player_move};

    fn replay(grid: &Grid, steps: &[Direction]) -> (Grid, Position) {
        let mut live = grid.clone();
        let mut player = live.start_position();
        for (i, &step) in steps.iter().enumerate() {
            assert!(
                apply_player_move(&mut player, step, &mut live),
                "step {i} ({step}) rejected at {player}\n{live}"
            );
        }
        (live, player)
    }

    #[test]
    fn test_open_grid_walks_straight_up() {
        let grid = Grid::new(3, 4).unwrap();
        let steps = solution_steps(&grid, &[]).unwrap();
        assert_eq!(steps, [Direction::Up; 4]);
    }

    #[test]
    fn test_pushes_are_replayed() {
        let grid: Grid = "
            ...
            ###
            ...
        "
        .parse()
        .unwrap();
        let solution = PushSolver::new().solve(&grid).unwrap();
        let steps = solution_steps(&grid, solution.moves()).unwrap();
        let (live, player) = replay(&grid, &steps);
        assert!(player.is_departed());
        assert_eq!(live.block_count(), grid.block_count());
        assert_ne!(live, grid);
    }

    #[test]
    fn test_illegal_push_is_rejected() {
        let grid: Grid = "..\n##\n..".parse().unwrap();
        let bogus = [Move::new(Position::new(1, 0), Direction::Left)];
        assert_eq!(solution_steps(&grid, &bogus), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn test_solutions_replay_to_the_goal(grid in arb_playable_grid(1..=4, 1..=4, 0.45)) {
            let solver = PushSolver::with_config(
                SolverConfig::default().with_time_budget(std::time::Duration::from_secs(30)),
            );
            if let Some(solution) = solver.solve(&grid) {
                let steps = solution_steps(&grid, solution.moves());
                prop_assert!(steps.is_some(), "not replayable:\n{}\n{:?}", grid, solution);
                let (_, player) = replay(&grid, &steps.unwrap());
                prop_assert!(player.is_departed());
            }
        }
    }
}
