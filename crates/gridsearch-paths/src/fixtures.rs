//! Shared grids and assertions for the strategy tests.

use gridsearch_core::{Cell, Grid};

use crate::traits::GridOracle;

pub(crate) fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
    v.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

/// Start at (0, 0) boxed in by walls; goal (2, 2) open.
pub(crate) fn walled_in() -> Grid {
    Grid::parse(
        "\
.#.
#..
...",
    )
    .unwrap()
}

pub(crate) const CORRIDOR_START: Cell = Cell::new(0, 0);
pub(crate) const CORRIDOR_GOAL: Cell = Cell::new(0, 6);

/// Exactly one route from [`CORRIDOR_START`] to [`CORRIDOR_GOAL`], with a
/// dead-end spur off the middle.
pub(crate) fn corridor() -> Grid {
    Grid::parse(
        "\
..###..
#.###.#
#.....#
###.###
###.###",
    )
    .unwrap()
}

pub(crate) fn corridor_path() -> Vec<Cell> {
    cells(&[
        (0, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (2, 2),
        (2, 3),
        (2, 4),
        (2, 5),
        (1, 5),
        (0, 5),
        (0, 6),
    ])
}

pub(crate) fn assert_valid_path<G: GridOracle + ?Sized>(
    grid: &G,
    start: Cell,
    goal: Cell,
    path: &[Cell],
) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for c in path {
        assert!(grid.in_bounds(*c) && grid.is_open(*c), "{c} not open");
    }
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
    }
}
