use std::collections::{HashMap, HashSet, VecDeque};

use boulder_core::{Direction, Grid, Position};

/// Cells the player can reach without pushing anything.
#[derive(Debug)]
pub(crate) struct Reach {
    /// Reached cells in discovery order, starting with the player's own cell.
    pub(crate) cells: Vec<Position>,
    /// Whether a reached goal-row cell lets the player leave the board.
    pub(crate) exits: bool,
}

/// Returns the on-board neighbors of `pos`, plus the departed pseudo-position
/// above it when `pos` is on the goal row.
pub(crate) fn neighbors(grid: &Grid, pos: Position) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .map(move |dir| pos.step(dir))
        .filter(move |next| next.is_departed() || grid.contains(*next))
}

/// Flood-fills free cells from `start`.
///
/// Filling stops as soon as a way past the goal edge is found.
pub(crate) fn flood(grid: &Grid, start: Position) -> Reach {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);
    let mut cells = Vec::new();

    while let Some(pos) = queue.pop_front() {
        if !seen.insert(pos) {
            continue;
        }
        cells.push(pos);
        for next in neighbors(grid, pos) {
            if next.is_departed() {
                return Reach { cells, exits: true };
            }
            if grid.is_free(next) {
                queue.push_back(next);
            }
        }
    }
    Reach {
        cells,
        exits: false,
    }
}

/// Finds a shortest walk over free cells from `start` to any cell matching
/// `is_target`.
pub(crate) fn find_walk<F>(grid: &Grid, start: Position, is_target: F) -> Option<Vec<Direction>>
where
    F: Fn(Position) -> bool,
{
    let mut came_from: HashMap<Position, (Position, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut seen = HashSet::from([start]);

    while let Some(pos) = queue.pop_front() {
        if is_target(pos) {
            let mut steps = Vec::new();
            let mut cursor = pos;
            while let Some(&(prev, dir)) = came_from.get(&cursor) {
                steps.push(dir);
                cursor = prev;
            }
            steps.reverse();
            return Some(steps);
        }
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if grid.is_free(next) && seen.insert(next) {
                came_from.insert(next, (pos, dir));
                queue.push_back(next);
            }
        }
    }
    None
}
