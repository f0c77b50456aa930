use gridsearch_core::Cell;

use crate::traits::GridOracle;

/// Open orthogonal neighbours of `c`, in the order up, down, left, right.
///
/// A neighbour is kept iff it is in bounds and open. Allocates a fresh
/// vector; search loops use [`Neighbors`] to reuse one buffer instead.
pub fn neighbors<G: GridOracle + ?Sized>(c: Cell, grid: &G) -> Vec<Cell> {
    Neighbors::new().expand(c, grid).to_vec()
}

/// Cached neighbour computation helper.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the open, in-bounds orthogonal neighbours of `c`
    /// (up, down, left, right).
    pub fn expand<G: GridOracle + ?Sized>(&mut self, c: Cell, grid: &G) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if grid.in_bounds(n) && grid.is_open(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
