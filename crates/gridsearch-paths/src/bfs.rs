use std::collections::VecDeque;

use gridsearch_core::Cell;

use crate::neighbors::Neighbors;
use crate::result::{SearchError, SearchResult};
use crate::search::{Recorder, check_endpoints};
use crate::traits::GridOracle;
use crate::visited::VisitedSet;

/// Breadth-first search from `start` to `goal`.
///
/// Cells are marked visited when enqueued, so the first path that reaches
/// the goal is a shortest one in number of steps. Returns an error only if
/// an endpoint is out of bounds or blocked.
pub fn bfs<G: GridOracle + ?Sized>(
    start: Cell,
    goal: Cell,
    grid: &G,
) -> Result<SearchResult, SearchError> {
    check_endpoints(start, goal, grid)?;

    let (mut rec, root) = Recorder::new("bfs", start);
    let mut visited = VisitedSet::new(grid.dimensions());
    visited.insert(start);

    let mut queue: VecDeque<_> = VecDeque::new();
    queue.push_back(root);

    let mut nbuf = Neighbors::new();

    while let Some(node) = queue.pop_front() {
        let cell = rec.expand(node);
        if cell == goal {
            return Ok(rec.finish(Some(node)));
        }

        for &n in nbuf.expand(cell, grid) {
            if visited.insert(n) {
                queue.push_back(rec.child(n, node));
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
        let res = bfs(Cell::new(0, 0), Cell::new(2, 2), &g).unwrap();
        assert_eq!(res.steps(), Some(4));
        assert_eq!(
            res.path().unwrap(),
            cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(res.expanded(), 9);
        assert_eq!(res.trace().len(), 9);
    }

    #[test]
    fn expansion_order_is_breadth_first() {
        let g = Grid::new(3, 3);
        let res = bfs(Cell::new(0, 0), Cell::new(2, 2), &g).unwrap();
        let order: Vec<_> = res.trace().cells().collect();
        assert_eq!(
            order,
            cells(&[
                (0, 0),
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2)
            ])
        );
    }

    #[test]
    fn walled_in_start() {
        let g = fixtures::walled_in();
        let res = bfs(Cell::new(0, 0), Cell::new(2, 2), &g).unwrap();
        assert_eq!(res.path(), None);
        assert_eq!(res.expanded(), 1);
        assert_eq!(res.trace().len(), 1);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::new(2, 2);
        let s = Cell::new(1, 1);
        let res = bfs(s, s, &g).unwrap();
        assert_eq!(res.path().unwrap(), [s]);
        assert_eq!(res.expanded(), 1);
        let step = res.trace().step(0).unwrap();
        assert_eq!(step.cell, s);
        assert_eq!(step.path, vec![s]);
    }

    #[test]
    fn shortest_around_a_wall() {
        let g = Grid::parse(
            "\
.....
.###.
...#.
.#...",
        )
        .unwrap();
        let res = bfs(Cell::new(2, 2), Cell::new(0, 4), &g).unwrap();
        fixtures::assert_valid_path(&g, Cell::new(2, 2), Cell::new(0, 4), res.path().unwrap());
        assert_eq!(res.steps(), Some(6));
    }

    #[test]
    fn trace_paths_end_at_expanded_cell() {
        let g = fixtures::corridor();
        let res = bfs(fixtures::CORRIDOR_START, fixtures::CORRIDOR_GOAL, &g).unwrap();
        for step in res.trace().iter() {
            assert_eq!(step.path.first(), Some(&fixtures::CORRIDOR_START));
            assert_eq!(step.path.last(), Some(&step.cell));
        }
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = fixtures::walled_in();
        assert!(matches!(
            bfs(Cell::new(0, 1), Cell::new(2, 2), &g),
            Err(SearchError::Blocked { .. })
        ));
        assert!(matches!(
            bfs(Cell::new(0, 0), Cell::new(3, 0), &g),
            Err(SearchError::OutOfBounds { .. })
        ));
    }
}
