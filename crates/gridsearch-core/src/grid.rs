//! A rectangular matrix of open/blocked cells.
//!
//! [`Grid`] owns its tiles in a flat row-major buffer. Unlike a shared-buffer
//! view, a `Grid` is a plain value: it is `Send + Sync`, so one snapshot can
//! be searched by several strategies at once as long as nobody mutates it.

use std::fmt;

use crate::geom::{Cell, Dims};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable.
    #[default]
    Open,
    /// Impassable.
    Blocked,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// Character used by [`Grid::parse`] and the grid's `Display` output.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Blocked => '#',
        }
    }

    /// Parse a tile from `.`/`#`, or the `0`/`1` matrix notation.
    #[inline]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Tile::Open),
            '#' | '1' => Some(Tile::Blocked),
            _ => None,
        }
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The textual grid had no rows.
    #[error("grid: no rows")]
    Empty,
    /// A row had a different width from the first one.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#01` was found.
    #[error("grid: invalid character \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
    /// A tile buffer did not match the advertised dimensions.
    #[error("grid: expected {expected} tiles, found {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// A rectangular grid of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: Dims,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid with every cell open.
    pub fn new(rows: i32, cols: i32) -> Self {
        let dims = Dims::new(rows, cols);
        Self {
            dims,
            tiles: vec![Tile::Open; dims.len()],
        }
    }

    /// Build a grid from a row-major tile buffer.
    pub fn from_tiles(dims: Dims, tiles: Vec<Tile>) -> Result<Self, GridError> {
        if tiles.len() != dims.len() {
            return Err(GridError::SizeMismatch {
                expected: dims.len(),
                found: tiles.len(),
            });
        }
        Ok(Self { dims, tiles })
    }

    /// Parse a grid from text, one row per line.
    ///
    /// `.` and `0` are open, `#` and `1` are blocked. Spaces between cells
    /// are ignored, as are leading and trailing blank lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => return Err(GridError::Empty),
        };

        let mut tiles = Vec::new();
        let mut width = None;
        for (r, line) in lines.iter().enumerate() {
            let mut found = 0;
            for (c, ch) in line.chars().filter(|ch| *ch != ' ').enumerate() {
                let tile = Tile::from_symbol(ch).ok_or(GridError::InvalidChar {
                    ch,
                    cell: Cell::new(r as i32, c as i32),
                })?;
                tiles.push(tile);
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::InconsistentSize {
                    row: r,
                    expected,
                    found,
                });
            }
        }

        let cols = width.unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        Self::from_tiles(Dims::new(lines.len() as i32, cols as i32), tiles)
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Get the tile at a cell, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.dims.index(c).map(|i| self.tiles[i])
    }

    /// Set the tile at a cell. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, tile: Tile) {
        if let Some(i) = self.dims.index(c) {
            self.tiles[i] = tile;
        }
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Cell, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Cell, Tile)> + '_ {
        self.dims.iter().zip(self.tiles.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.dims.cols.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.symbol())?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(ROOM_SERDE).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    const ROOM_SERDE: &str = ".#\n#.";
}
