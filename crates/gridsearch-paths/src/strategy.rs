use std::fmt;
use std::str::FromStr;

use gridsearch_core::Cell;

use crate::result::{SearchError, SearchResult};
use crate::traits::GridOracle;
use crate::{astar, bfs, dfs};

/// Common interface of every search strategy.
///
/// Implementations must not mutate the grid or keep state between calls:
/// the same inputs always give the same [`SearchResult`].
pub trait SearchStrategy {
    /// Short display name, used as the key in comparisons.
    fn name(&self) -> &str;

    /// Search for a path from `start` to `goal`.
    fn search(
        &self,
        start: Cell,
        goal: Cell,
        grid: &dyn GridOracle,
    ) -> Result<SearchResult, SearchError>;
}

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStar,
}

impl Strategy {
    /// All strategies, in comparison-table order.
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar];

    /// Short name: `BFS`, `DFS` or `A*`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::AStar => "A*",
        }
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Strategy::DepthFirst)
    }
}

impl SearchStrategy for Strategy {
    fn name(&self) -> &str {
        self.short_name()
    }

    fn search(
        &self,
        start: Cell,
        goal: Cell,
        grid: &dyn GridOracle,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Strategy::BreadthFirst => bfs(start, goal, grid),
            Strategy::DepthFirst => dfs(start, goal, grid),
            Strategy::AStar => astar(start, goal, grid),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy \u{201c}{0}\u{201d} (expected bfs, dfs or astar)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts `bfs`, `dfs`, `astar` and `a*`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// A plain search function with a display name.
///
/// Lets custom strategies sit next to [`Strategy`] values in a comparison.
pub struct NamedStrategy<F> {
    name: String,
    search: F,
}

impl<F> NamedStrategy<F>
where
    F: Fn(Cell, Cell, &dyn GridOracle) -> Result<SearchResult, SearchError>,
{
    pub fn new(name: impl Into<String>, search: F) -> Self {
        Self {
            name: name.into(),
            search,
        }
    }
}

impl<F> SearchStrategy for NamedStrategy<F>
where
    F: Fn(Cell, Cell, &dyn GridOracle) -> Result<SearchResult, SearchError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn search(
        &self,
        start: Cell,
        goal: Cell,
        grid: &dyn GridOracle,
    ) -> Result<SearchResult, SearchError> {
        (self.search)(start, goal, grid)
    }
}
