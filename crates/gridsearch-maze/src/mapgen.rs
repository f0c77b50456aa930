//! Random maze generation.
//!
//! Every cell is drawn independently: blocked with probability
//! `wall_prob`, open otherwise. The top-left start and bottom-right goal
//! are then forced open so the search engine's endpoint precondition
//! always holds. Nothing guarantees the goal is reachable unless
//! [`MazeGen::generate_solvable`] is used.

use gridsearch_core::{Cell, Grid, Tile};
use gridsearch_paths::bfs;
use rand::{Rng, RngExt};

use crate::config::{MazeConfig, MazeError};

/// A generated grid with its start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

impl Maze {
    /// Wrap an existing grid, with the start at the top-left corner and the
    /// goal at the bottom-right one. Both are forced open.
    pub fn from_grid(mut grid: Grid) -> Self {
        let start = Cell::ZERO;
        let goal = Cell::new(grid.rows() - 1, grid.cols() - 1);
        grid.set(start, Tile::Open);
        grid.set(goal, Tile::Open);
        Self { grid, start, goal }
    }
}

/// Maze generator with an injected random source.
///
/// Seed the generator (e.g. `StdRng::seed_from_u64`) for reproducible
/// mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one maze.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Maze, MazeError> {
        config.validate()?;

        let mut grid = Grid::new(config.rows, config.cols);
        for c in grid.dims().iter() {
            let r: f64 = self.rng.random();
            if r < config.wall_prob {
                grid.set(c, Tile::Blocked);
            }
        }

        let maze = Maze::from_grid(grid);
        log::debug!(
            "generated {} maze with {} walls",
            maze.grid.dims(),
            maze.grid.count(Tile::Blocked)
        );
        Ok(maze)
    }

    /// Generate mazes until one has a path from start to goal.
    ///
    /// Gives up with [`MazeError::Unsolvable`] after `attempts` tries.
    pub fn generate_solvable(
        &mut self,
        config: &MazeConfig,
        attempts: usize,
    ) -> Result<Maze, MazeError> {
        for attempt in 1..=attempts {
            let maze = self.generate(config)?;
            // Endpoints were forced open above, so the search cannot fail.
            let solvable = bfs(maze.start, maze.goal, &maze.grid)
                .map(|res| res.found())
                .unwrap_or(false);
            if solvable {
                return Ok(maze);
            }
            log::warn!("maze attempt {attempt}/{attempts} has no path, regenerating");
        }
        Err(MazeError::Unsolvable { attempts })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn maze_round_trip() {
        let config = MazeConfig {
            rows: 4,
            cols: 5,
            wall_prob: 0.3,
        };
        let maze = MazeGen::new(StdRng::seed_from_u64(11))
            .generate(&config)
            .unwrap();
        let json = serde_json::to_string(&maze).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(maze, back);
        assert_eq!(back.goal, Cell::new(3, 4));
    }

    #[test]
    fn config_round_trip() {
        let config = MazeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
