//! Push and step legality.
//!
//! These rules are shared by the search and by interactive play, so a push
//! sequence found by [`PushSolver`](crate::PushSolver) can always be replayed
//! with [`apply_player_move`].

use boulder_core::{Cell, Direction, Grid, Move, Position};

/// Returns `true` if the boulder at `block` can be pushed one cell in
/// `direction`.
///
/// A push is legal when:
///
/// - `block` holds a boulder,
/// - the boulder is neither on the goal row nor on the start row (boulders on
///   either edge row never move, even sideways),
/// - the destination one cell further is on the board and empty.
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Grid, Position};
/// use boulder_solver::can_push;
///
/// let grid: Grid = "
///     ...
///     .#.
///     .#.
/// "
/// .parse()?;
/// assert!(can_push(&grid, Position::new(1, 1), Direction::Left));
/// // boulders on the start row are fixed
/// assert!(!can_push(&grid, Position::new(2, 1), Direction::Left));
/// // blocked by the other boulder
/// assert!(!can_push(&grid, Position::new(1, 1), Direction::Down));
/// # Ok::<(), boulder_core::GridParseError>(())
/// ```
#[must_use]
pub fn can_push(grid: &Grid, block: Position, direction: Direction) -> bool {
    grid.is_block(block) && !grid.is_edge_row(block) && grid.is_free(block.step(direction))
}

/// Pushes the boulder at `block` one cell in `direction`.
///
/// On success the destination becomes a boulder, `block` becomes empty, and the
/// push is returned. On failure the grid is left untouched.
pub fn push_block(grid: &mut Grid, block: Position, direction: Direction) -> Option<Move> {
    if !can_push(grid, block, direction) {
        return None;
    }
    grid.set(block.step(direction), Cell::Block);
    grid.set(block, Cell::Empty);
    Some(Move::new(block, direction))
}

/// Applies one player step to a live grid.
///
/// Walking onto an empty cell moves the player. Walking into a boulder pushes
/// it if [`can_push`] allows, and the player takes the boulder's old cell.
/// Stepping up from the goal row moves the player past the goal edge, to row
/// [`Position::DEPARTED_ROW`]. Anything else is rejected.
///
/// Returns `true` if the player moved. When it returns `false`, neither the
/// grid nor the position has changed.
///
/// # Examples
///
/// ```
/// use boulder_core::{Direction, Grid, Position};
/// use boulder_solver::apply_player_move;
///
/// let mut grid: Grid = "
///     ...
///     .#.
///     ...
/// "
/// .parse()?;
/// let mut player = grid.start_position();
///
/// assert!(apply_player_move(&mut player, Direction::Up, &mut grid));
/// // pushes the boulder from (1, 1) to (1, 2)
/// assert!(apply_player_move(&mut player, Direction::Right, &mut grid));
/// assert_eq!(player, Position::new(1, 1));
/// // the boulder would leave the board
/// assert!(!apply_player_move(&mut player, Direction::Right, &mut grid));
/// assert!(apply_player_move(&mut player, Direction::Up, &mut grid));
/// assert!(apply_player_move(&mut player, Direction::Up, &mut grid));
/// assert!(player.is_departed());
/// assert!(grid.is_block(Position::new(1, 2)));
/// # Ok::<(), boulder_core::GridParseError>(())
/// ```
pub fn apply_player_move(player: &mut Position, direction: Direction, grid: &mut Grid) -> bool {
    if !grid.contains(*player) {
        return false;
    }
    let target = player.step(direction);
    if target.is_departed() {
        *player = target;
        return true;
    }
    let moved = match grid.get(target) {
        Some(Cell::Empty) => true,
        Some(Cell::Block) => push_block(grid, target, direction).is_some(),
        None => false,
    };
    if moved {
        *player = target;
    }
    moved
}

#[cfg(test)]
mod tests {
    use boulder_core::testing::arb_grid;
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_push_moves_block() {
        let mut g = grid(
            "
            ...
            .#.
            ...
            ",
        );
        let push = push_block(&mut g, Position::new(1, 1), Direction::Up).unwrap();
        assert_eq!(push, Move::new(Position::new(1, 1), Direction::Up));
        assert!(g.is_block(Position::new(0, 1)));
        assert!(g.is_free(Position::new(1, 1)));
        assert_eq!(g.block_count(), 1);
    }

    #[test]
    fn test_edge_row_blocks_never_move() {
        // sideways pushes would stay on the board, but edge rows are frozen
        let mut g = grid(
            "
            .#.
            ...
            .#.
            ",
        );
        let before = g.clone();
        for block in [Position::new(0, 1), Position::new(2, 1)] {
            for dir in Direction::ALL {
                assert!(!can_push(&g, block, dir));
                assert_eq!(push_block(&mut g, block, dir), None);
            }
        }
        assert_eq!(g, before);
    }

    #[test]
    fn test_push_rejects_off_board_and_occupied() {
        let mut g = grid(
            "
            ...
            #.#
            ...
            ",
        );
        assert!(!can_push(&g, Position::new(1, 0), Direction::Left));
        assert!(!can_push(&g, Position::new(1, 2), Direction::Right));
        assert!(can_push(&g, Position::new(1, 0), Direction::Right));
        assert!(push_block(&mut g, Position::new(1, 1), Direction::Up).is_none());
        g.set(Position::new(1, 1), Cell::Block);
        assert!(!can_push(&g, Position::new(1, 0), Direction::Right));
    }

    #[test]
    fn test_step_onto_empty() {
        let mut g = grid("..\n..");
        let mut player = g.start_position();
        assert!(apply_player_move(&mut player, Direction::Up, &mut g));
        assert_eq!(player, Position::new(0, 0));
        assert!(!apply_player_move(&mut player, Direction::Left, &mut g));
        assert_eq!(player, Position::new(0, 0));
    }

    #[test]
    fn test_step_past_goal_edge_departs() {
        let mut g = grid("..\n..");
        let mut player = Position::new(0, 1);
        assert!(apply_player_move(&mut player, Direction::Up, &mut g));
        assert!(player.is_departed());
        for dir in Direction::ALL {
            assert!(!apply_player_move(&mut player, dir, &mut g));
        }
    }

    #[test]
    fn test_rejected_step_is_a_no_op() {
        let mut g = grid(
            "
            .#
            .#
            ..
            ",
        );
        let before = g.clone();
        let mut player = Position::new(2, 1);
        // (1, 1) can only be pushed up into (0, 1), which is occupied
        assert!(!apply_player_move(&mut player, Direction::Up, &mut g));
        assert!(!apply_player_move(&mut player, Direction::Right, &mut g));
        assert!(!apply_player_move(&mut player, Direction::Down, &mut g));
        assert_eq!(player, Position::new(2, 1));
        assert_eq!(g, before);
    }

    #[test]
    fn test_step_pushes_block() {
        let mut g = grid(
            "
            ...
            .#.
            ...
            ",
        );
        let mut player = Position::new(1, 0);
        assert!(apply_player_move(&mut player, Direction::Right, &mut g));
        assert_eq!(player, Position::new(1, 1));
        assert!(g.is_block(Position::new(1, 2)));
    }

    fn arb_interior_push() -> impl Strategy<Value = (Grid, Position, Direction)> {
        arb_grid(3..=6, 3..=6, 0.5)
            .prop_flat_map(|grid| {
                let (width, height) = (grid.width(), grid.height());
                (Just(grid), 0..width, 1..height - 1, 0_usize..4)
            })
            .prop_map(|(mut grid, col, row, dir)| {
                #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let block = Position::new(row as i32, col as i32);
                grid.set(block, Cell::Block);
                (grid, block, Direction::ALL[dir])
            })
    }

    proptest! {
        #[test]
        fn test_push_then_push_back_restores(input in arb_interior_push()) {
            let (original, block, dir) = input;
            let mut g = original.clone();
            let Some(push) = push_block(&mut g, block, dir) else {
                prop_assert_eq!(&g, &original);
                return Ok(());
            };
            let moved_to = push.destination();
            prop_assert!(g.is_block(moved_to));
            prop_assert_eq!(g.block_count(), original.block_count());
            // pushing back is only legal while the boulder stays off the edge rows
            if !g.is_edge_row(moved_to) {
                let back = push_block(&mut g, moved_to, dir.opposite());
                prop_assert!(back.is_some());
                prop_assert_eq!(&g, &original);
            }
        }
    }
}
