//! Maze utilities for gridsearch: random generation and text rendering.
//!
//! The generator is the caller that establishes the search engine's
//! precondition: the start and goal cells of every [`Maze`] are open.

pub mod config;
pub mod mapgen;
pub mod render;

pub use config::{MazeConfig, MazeError};
pub use mapgen::{Maze, MazeGen};
pub use render::render;
