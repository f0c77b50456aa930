//! Comparison harness for gridsearch strategies.
//!
//! [`compare`] runs a reference strategy once to fix the shortest-path
//! baseline, then times every strategy on the same grid and reports its
//! step count, expansions, wall-clock duration and [`path_quality`].
//! The harness only observes results; it never influences a search.

mod compare;
mod quality;
mod table;

pub use compare::{Comparison, StrategyRun, StrategyStats, compare};
pub use quality::path_quality;
