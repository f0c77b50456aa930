//! Plain-text maze drawing.

use std::collections::HashSet;

use gridsearch_core::{Cell, Tile};

use crate::mapgen::Maze;

/// Draw `maze` with an optional path overlay.
///
/// One line per row, cells separated by a space: `S` start, `G` goal,
/// `X` path, `#` blocked, `.` open. A dashed separator of width
/// `2 × cols` closes the drawing.
pub fn render(maze: &Maze, path: Option<&[Cell]>) -> String {
    let on_path: HashSet<Cell> = path.unwrap_or_default().iter().copied().collect();
    let dims = maze.grid.dims();
    let mut out = String::with_capacity(dims.len() * 2 + dims.rows as usize + 1);

    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let c = Cell::new(row, col);
            let ch = if c == maze.start {
                'S'
            } else if c == maze.goal {
                'G'
            } else if on_path.contains(&c) {
                'X'
            } else {
                maze.grid.at(c).unwrap_or(Tile::Blocked).symbol()
            };
            if col > 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str(&"-".repeat(2 * dims.cols.max(0) as usize));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Grid;

    fn maze() -> Maze {
        Maze::from_grid(Grid::parse("..#\n#..\n...").unwrap())
    }

    #[test]
    fn bare_maze() {
        assert_eq!(render(&maze(), None), "S . #\n# . .\n. . G\n------\n");
    }

    #[test]
    fn path_overlay() {
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ];
        assert_eq!(
            render(&maze(), Some(&path)),
            "S X #\n# X X\n. . G\n------\n"
        );
    }
}
