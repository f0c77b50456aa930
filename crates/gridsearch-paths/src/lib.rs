//! Search strategies for 4-connected, unit-cost grids.
//!
//! This crate implements three interchangeable traversals over a
//! [`GridOracle`]:
//!
//! - **Breadth-first** ([`bfs`]): shortest path in steps.
//! - **Depth-first** ([`dfs`]): first path found, usually not the shortest.
//! - **A\*** ([`astar`]): shortest path, guided by the [`manhattan`] heuristic.
//!
//! All three return the same [`SearchResult`]: the path (if any), the number
//! of expansions and a [`Trace`] of every expanded cell together with the
//! partial path that led to it, so callers can replay a search without
//! running it again.
//!
//! # Neighbour order
//!
//! Cells are expanded toward up, down, left, right (see [`neighbors`]).
//! This order is part of the contract: it fixes BFS and DFS tie-breaking and
//! makes every strategy deterministic for a given grid.
//!
//! # Polymorphism
//!
//! | Item | Use |
//! |---|---|
//! | [`SearchStrategy`] | object-safe interface, `search(start, goal, grid)` |
//! | [`Strategy`] | the three built-in strategies as an enum |
//! | [`NamedStrategy`] | wrap any function with a display name |

mod arena;
mod astar;
mod bfs;
mod dfs;
mod distance;
#[cfg(test)]
mod fixtures;
mod neighbors;
mod result;
mod search;
mod strategy;
mod traits;
mod visited;

pub use arena::{NodeId, PathArena};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use neighbors::{Neighbors, neighbors};
pub use result::{Endpoint, SearchError, SearchResult, Trace, VisitStep};
pub use strategy::{NamedStrategy, ParseStrategyError, SearchStrategy, Strategy};
pub use traits::GridOracle;
