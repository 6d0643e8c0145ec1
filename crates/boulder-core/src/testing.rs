//! Proptest strategies for random boards.
//!
//! Available to this crate's tests and, through the `testing` feature, to the
//! tests of downstream crates.

use std::ops::RangeInclusive;

use proptest::prelude::*;

use crate::{Cell, Grid};

/// Builds a grid whose cells are boulders where `bits` is `true`, in
/// row-major order.
///
/// Missing bits leave cells empty; extra bits are ignored.
///
/// # Panics
///
/// Panics if `width` and `height` do not form a valid grid.
#[track_caller]
#[must_use]
pub fn grid_from_bits(width: usize, height: usize, bits: &[bool]) -> Grid {
    let mut grid = Grid::new(width, height)
        .unwrap_or_else(|err| panic!("invalid test grid {width}x{height}: {err}"));
    let positions = grid.positions().collect::<Vec<_>>();
    for (pos, _) in positions.into_iter().zip(bits).filter(|(_, bit)| **bit) {
        grid.set(pos, Cell::Block);
    }
    grid
}

/// Generates grids with the given dimension ranges where each cell is a
/// boulder with probability `density`.
///
/// # Panics
///
/// The strategy panics if a range yields a zero dimension.
pub fn arb_grid(
    widths: RangeInclusive<usize>,
    heights: RangeInclusive<usize>,
    density: f64,
) -> impl Strategy<Value = Grid> {
    (widths, heights).prop_flat_map(move |(width, height)| {
        prop::collection::vec(prop::bool::weighted(density), width * height)
            .prop_map(move |bits| grid_from_bits(width, height, &bits))
    })
}

/// Like [`arb_grid`], but the start cell is always empty so the player has
/// somewhere to stand.
pub fn arb_playable_grid(
    widths: RangeInclusive<usize>,
    heights: RangeInclusive<usize>,
    density: f64,
) -> impl Strategy<Value = Grid> {
    arb_grid(widths, heights, density).prop_map(|mut grid| {
        let start = grid.start_position();
        grid.set(start, Cell::Empty);
        grid
    })
}
