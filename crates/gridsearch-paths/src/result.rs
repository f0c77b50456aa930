use std::fmt;

use gridsearch_core::{Cell, Dims};

use crate::arena::{NodeId, PathArena};

/// Which end of a search a [`SearchError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// A search was called with an endpoint the grid cannot host.
///
/// An unreachable goal is *not* an error; see [`SearchResult::path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{endpoint} {cell} is outside the {dims} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        dims: Dims,
    },
    #[error("{endpoint} {cell} is blocked")]
    Blocked { endpoint: Endpoint, cell: Cell },
}

/// One expansion: the popped cell and the path that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitStep {
    pub cell: Cell,
    pub path: Vec<Cell>,
}

/// Ordered log of every expansion made by one search.
///
/// Steps are stored as arena handles; partial paths are rebuilt only when a
/// step is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    arena: PathArena,
    steps: Vec<NodeId>,
}

impl Trace {
    pub(crate) fn new(arena: PathArena, steps: Vec<NodeId>) -> Self {
        Self { arena, steps }
    }

    /// Number of expansions recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The expanded cells in expansion order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.steps.iter().map(|&id| self.arena.cell(id))
    }

    /// The partial path of step `i`, from start to the expanded cell.
    pub fn path_to(&self, i: usize) -> Option<Vec<Cell>> {
        self.steps.get(i).map(|&id| self.arena.path(id))
    }

    /// Step `i` with its partial path materialized.
    pub fn step(&self, i: usize) -> Option<VisitStep> {
        self.steps.get(i).map(|&id| VisitStep {
            cell: self.arena.cell(id),
            path: self.arena.path(id),
        })
    }

    /// Replay every step in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = VisitStep> + '_ {
        self.steps.iter().map(|&id| VisitStep {
            cell: self.arena.cell(id),
            path: self.arena.path(id),
        })
    }
}

/// Output of a single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    path: Option<Vec<Cell>>,
    expanded: usize,
    trace: Trace,
}

impl SearchResult {
    pub(crate) fn new(path: Option<Vec<Cell>>, expanded: usize, trace: Trace) -> Self {
        Self {
            path,
            expanded,
            trace,
        }
    }

    /// The path from start to goal inclusive, or `None` if the goal is
    /// unreachable.
    #[inline]
    pub fn path(&self) -> Option<&[Cell]> {
        self.path.as_deref()
    }

    /// Number of moves on the path (path length minus one).
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of frontier pops, including stale ones skipped by A*.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
