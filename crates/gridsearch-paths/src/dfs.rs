use gridsearch_core::Cell;

use crate::neighbors::Neighbors;
use crate::result::{SearchError, SearchResult};
use crate::search::{Recorder, check_endpoints};
use crate::traits::GridOracle;
use crate::visited::VisitedSet;

/// Depth-first search from `start` to `goal`.
///
/// Neighbours are pushed in the order up, down, left, right and marked
/// visited at push time, so the last pushed (right) is explored first. The
/// returned path is whatever this order reaches first and is generally not
/// the shortest.
pub fn dfs<G: GridOracle + ?Sized>(
    start: Cell,
    goal: Cell,
    grid: &G,
) -> Result<SearchResult, SearchError> {
    check_endpoints(start, goal, grid)?;

    let (mut rec, root) = Recorder::new("dfs", start);
    let mut visited = VisitedSet::new(grid.dimensions());
    visited.insert(start);

    let mut stack = vec![root];
    let mut nbuf = Neighbors::new();

    while let Some(node) = stack.pop() {
        let cell = rec.expand(node);
        if cell == goal {
            return Ok(rec.finish(Some(node)));
        }

        for &n in nbuf.expand(cell, grid) {
            if visited.insert(n) {
                stack.push(rec.child(n, node));
            }
        }
    }

    Ok(rec.finish(None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, cells};
    use gridsearch_core::Grid;

    #[test]
    fn open_3x3_corner_to_corner() {
        let g = Grid::new(3, 3);
        let res = dfs(Cell::new(0, 0), Cell::new(2, 2), &g).unwrap();
        assert_eq!(
            res.path().unwrap(),
            cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)])
        );
        assert_eq!(res.expanded(), 5);
    }

    #[test]
    fn takes_the_long_way() {
        // The goal is two steps below the start, but the right-hand branch
        // is explored first and reaches it from behind.
        let g = Grid::new(3, 3);
        let res = dfs(Cell::new(0, 0), Cell::new(2, 0), &g).unwrap();
        assert_eq!(
            res.path().unwrap(),
            cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)])
        );
        assert_eq!(res.steps(), Some(6));
        assert_eq!(res.expanded(), 7);
    }

    #[test]
    fn walled_in_start() {
        let g = fixtures::walled_in();
        let res = dfs(Cell::new(0, 0), Cell::new(2, 2), &g).unwrap();
        assert_eq!(res.path(), None);
        assert_eq!(res.expanded(), 1);
        assert_eq!(res.trace().len(), 1);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::new(1, 1);
        let s = Cell::ZERO;
        let res = dfs(s, s, &g).unwrap();
        assert_eq!(res.path().unwrap(), [s]);
        assert_eq!(res.expanded(), 1);
    }

    #[test]
    fn unreachable_goal_exhausts_component() {
        let g = Grid::parse("..#.\n..#.").unwrap();
        let res = dfs(Cell::new(0, 0), Cell::new(1, 3), &g).unwrap();
        assert!(!res.found());
        assert_eq!(res.expanded(), 4);
    }
}
