//! Maze generation parameters.

/// Size and density of a generated maze.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Number of rows. Must be at least 1.
    pub rows: i32,
    /// Number of columns. Must be at least 1.
    pub cols: i32,
    /// Probability in `[0, 1]` that a cell is blocked.
    pub wall_prob: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            wall_prob: 0.25,
        }
    }
}

impl MazeConfig {
    /// Check the parameters before generating.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(MazeError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_prob) {
            return Err(MazeError::InvalidWallProb(self.wall_prob));
        }
        Ok(())
    }
}

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MazeError {
    #[error("maze: invalid size {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },
    #[error("maze: wall probability {0} is outside [0, 1]")]
    InvalidWallProb(f64),
    #[error("maze: no solvable layout after {attempts} attempts")]
    Unsolvable { attempts: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_dimensions() {
        let cfg = MazeConfig {
            rows: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::InvalidSize { rows: 0, cols: 6 })
        );
    }

    #[test]
    fn rejects_wall_prob_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = MazeConfig {
                wall_prob: p,
                ..Default::default()
            };
            assert!(matches!(cfg.validate(), Err(MazeError::InvalidWallProb(_))));
        }
        let edge = MazeConfig {
            wall_prob: 1.0,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
    }
}
