use gridsearch_core::{Cell, Dims, Grid};

/// Read-only view of a grid, the only thing the search strategies query.
///
/// Implementations must answer consistently for the duration of a search.
/// Strategies never mutate the grid and take no locks, so the caller is
/// responsible for not changing it while a search is running.
pub trait GridOracle {
    /// Number of rows and columns.
    fn dimensions(&self) -> Dims;

    /// Whether `c` lies inside the grid.
    fn in_bounds(&self, c: Cell) -> bool {
        self.dimensions().contains(c)
    }

    /// Whether `c` can be walked on. Only meaningful for in-bounds cells.
    fn is_open(&self, c: Cell) -> bool;
}

impl GridOracle for Grid {
    #[inline]
    fn dimensions(&self) -> Dims {
        self.dims()
    }

    #[inline]
    fn is_open(&self, c: Cell) -> bool {
        self.at(c).is_some_and(|t| t.is_open())
    }
}

impl<G: GridOracle + ?Sized> GridOracle for &G {
    #[inline]
    fn dimensions(&self) -> Dims {
        (**self).dimensions()
    }

    #[inline]
    fn in_bounds(&self, c: Cell) -> bool {
        (**self).in_bounds(c)
    }

    #[inline]
    fn is_open(&self, c: Cell) -> bool {
        (**self).is_open(c)
    }
}
