use bitvec::vec::BitVec;
use gridsearch_core::{Cell, Dims};

/// Flat bitmap of visited cells, indexed row-major.
pub(crate) struct VisitedSet {
    dims: Dims,
    bits: BitVec,
}

impl VisitedSet {
    pub(crate) fn new(dims: Dims) -> Self {
        Self {
            dims,
            bits: BitVec::repeat(false, dims.len()),
        }
    }

    /// Mark `c` visited. Returns `true` if it was not visited before.
    /// Out-of-bounds cells are never recorded.
    pub(crate) fn insert(&mut self, c: Cell) -> bool {
        match self.dims.index(c) {
            Some(i) => !self.bits.replace(i, true),
            None => false,
        }
    }

    pub(crate) fn contains(&self, c: Cell) -> bool {
        self.dims.index(c).is_some_and(|i| self.bits[i])
    }
}
