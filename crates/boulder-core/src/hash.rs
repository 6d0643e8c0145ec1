//! Layout hashing.
//!
//! The layout hash identifies a board state by its boulders alone. Each row is
//! folded into a base-31 polynomial over its cell values (starting from `1`),
//! and the row hashes are folded into a base-7 polynomial (starting from `0`).
//! Arithmetic wraps on overflow, so two different layouts can in rare cases
//! share a hash. Solvers that key visited states by this value accept that.

use crate::{Cell, Grid};

/// Hashes one row of cells in column order.
///
/// # Examples
///
/// ```
/// use boulder_core::{Cell, hash::row_hash};
///
/// assert_eq!(row_hash(&[]), 1);
/// assert_eq!(row_hash(&[Cell::Block]), 32);
/// assert_eq!(row_hash(&[Cell::Empty, Cell::Block]), 31 * 31 + 1);
/// ```
#[must_use]
pub fn row_hash(cells: &[Cell]) -> u64 {
    cells.iter().fold(1, |acc: u64, cell| {
        acc.wrapping_mul(31).wrapping_add(u64::from(cell.value()))
    })
}

/// Hashes a whole layout in row order.
///
/// The player position is not part of a [`Grid`], so it never affects the
/// result.
#[must_use]
pub fn layout_hash(grid: &Grid) -> u64 {
    grid.rows()
        .fold(0, |acc: u64, row| acc.wrapping_mul(7).wrapping_add(row_hash(row)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Position, testing::arb_grid};

    #[test]
    fn test_layout_hash_small() {
        let grid: Grid = "#.\n..".parse().unwrap();
        let top = 31 * (31 + 1);
        let bottom = 31 * 31;
        assert_eq!(layout_hash(&grid), 7 * top + bottom);
    }

    #[test]
    fn test_layout_hash_order_sensitive() {
        let a: Grid = "#.\n..".parse().unwrap();
        let b: Grid = ".#\n..".parse().unwrap();
        let c: Grid = "..\n#.".parse().unwrap();
        assert_ne!(layout_hash(&a), layout_hash(&b));
        assert_ne!(layout_hash(&a), layout_hash(&c));
    }

    proptest! {
        #[test]
        fn test_hash_is_stable(grid in arb_grid(1..=5, 1..=5, 0.5)) {
            let first = layout_hash(&grid);
            prop_assert_eq!(first, layout_hash(&grid));
            prop_assert_eq!(first, layout_hash(&grid.clone()));
            prop_assert_eq!(first, grid.layout_hash());
        }

        #[test]
        fn test_hash_tracks_single_cell_change(grid in arb_grid(1..=5, 1..=5, 0.5), index in any::<prop::sample::Index>()) {
            let positions: Vec<Position> = grid.positions().collect();
            let pos = positions[index.index(positions.len())];
            let mut changed = grid.clone();
            let flipped = if grid[pos].is_block() { Cell::Empty } else { Cell::Block };
            changed.set(pos, flipped);
            prop_assert_ne!(layout_hash(&grid), layout_hash(&changed));
        }
    }
}
