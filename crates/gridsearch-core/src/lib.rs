//! **gridsearch-core**: value types shared across the *gridsearch* crates.
//!
//! This crate provides the coordinate type used as graph-node identity
//! ([`Cell`]), grid dimensions ([`Dims`]) and the rectangular open/blocked
//! matrix ([`Grid`]) that the search engine reads through its oracle trait.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Dims};
pub use grid::{Grid, GridError, Tile};
