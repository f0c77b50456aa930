use std::collections::BinaryHeap;

use gridsearch_core::Cell;

use crate::arena::NodeId;
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::result::{SearchError, SearchResult};
use crate::search::{Recorder, check_endpoints};
use crate::traits::GridOracle;
use crate::visited::VisitedSet;

/// Open-list entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `(f, g, node)` first.
///
/// Node ids are handed out in push order, so entries with equal `f` and `g`
/// come out first-in first-out. That is the full tie-break; nothing else
/// (in particular not the path) is compared.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    g: i32,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then(other.g.cmp(&self.g))
            .then(other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal` with the Manhattan heuristic.
///
/// A cell can sit in the open list several times with different `g`; only
/// its first pop is expanded and later pops are discarded. Every pop,
/// discarded or not, counts as an expansion and is logged to the trace.
/// The goal test happens before the closed-set test.
pub fn astar<G: GridOracle + ?Sized>(
    start: Cell,
    goal: Cell,
    grid: &G,
) -> Result<SearchResult, SearchError> {
    check_endpoints(start, goal, grid)?;

    let (mut rec, root) = Recorder::new("astar", start);
    let mut closed = VisitedSet::new(grid.dimensions());

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    open.push(OpenEntry {
        f: manhattan(start, goal),
        g: 0,
        node: root,
    });

    let mut nbuf = Neighbors::new();

    while let Some(OpenEntry { g, node, .. }) = open.pop() {
        let cell = rec.expand(node);
        if cell == goal {
            return Ok(rec.finish(Some(node)));
        }

        // Stale duplicate.
        if !closed.insert(cell) {
            continue;
        }

        for &n in nbuf.expand(cell, grid) {
            if closed.contains(n) {
                continue;
            }
            let ng = g + 1;
            open.push(OpenEntry {
                f: ng + manhattan(n, goal),
                g: ng,
                node: rec.child(n, node),
            });
        }
    }

    Ok(rec.finish(None))
}
