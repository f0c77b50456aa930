//! Bookkeeping shared by the three strategies.

use gridsearch_core::Cell;

use crate::arena::{NodeId, PathArena};
use crate::result::{Endpoint, SearchError, SearchResult, Trace};
use crate::traits::GridOracle;

/// Fail fast on endpoints a search could only answer wrongly.
pub(crate) fn check_endpoints<G: GridOracle + ?Sized>(
    start: Cell,
    goal: Cell,
    grid: &G,
) -> Result<(), SearchError> {
    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.in_bounds(cell) {
            return Err(SearchError::OutOfBounds {
                endpoint,
                cell,
                dims: grid.dimensions(),
            });
        }
        if !grid.is_open(cell) {
            return Err(SearchError::Blocked { endpoint, cell });
        }
    }
    Ok(())
}

/// Node arena, expansion counter and trace of one search call.
pub(crate) struct Recorder {
    name: &'static str,
    arena: PathArena,
    steps: Vec<NodeId>,
    expanded: usize,
}

impl Recorder {
    /// Start recording; returns the recorder and the root node for `start`.
    pub(crate) fn new(name: &'static str, start: Cell) -> (Self, NodeId) {
        let mut arena = PathArena::new();
        let root = arena.root(start);
        let rec = Self {
            name,
            arena,
            steps: Vec::new(),
            expanded: 0,
        };
        (rec, root)
    }

    /// Count a frontier pop and log it to the trace. Returns the popped cell.
    pub(crate) fn expand(&mut self, node: NodeId) -> Cell {
        self.expanded += 1;
        self.steps.push(node);
        let cell = self.arena.cell(node);
        log::trace!("{}: expand #{} {}", self.name, self.expanded, cell);
        cell
    }

    /// Allocate a frontier node for `cell` reached from `parent`.
    #[inline]
    pub(crate) fn child(&mut self, cell: Cell, parent: NodeId) -> NodeId {
        self.arena.child(cell, parent)
    }

    /// Close the search, reconstructing the path if `goal` was reached.
    pub(crate) fn finish(self, goal: Option<NodeId>) -> SearchResult {
        let path = goal.map(|id| self.arena.path(id));
        log::debug!(
            "{}: {} after {} expansions",
            self.name,
            match &path {
                Some(p) => format!("found path of {} steps", p.len() - 1),
                None => "no path".to_string(),
            },
            self.expanded
        );
        SearchResult::new(path, self.expanded, Trace::new(self.arena, self.steps))
    }
}
