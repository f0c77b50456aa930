use gridsearch_core::Cell;

/// Handle to a node stored in a [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in allocation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(i: usize) -> Self {
        Self(i)
    }
}

const NO_PARENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ArenaNode {
    cell: Cell,
    parent: usize,
}

/// Append-only store of search nodes linked to their parents.
///
/// Every frontier push allocates one node, so a path never has to be
/// copied while the search runs. The path to any node is rebuilt by
/// walking parent links back to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathArena {
    nodes: Vec<ArenaNode>,
}

impl PathArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with no parent.
    pub(crate) fn root(&mut self, cell: Cell) -> NodeId {
        self.alloc(cell, NO_PARENT)
    }

    /// Allocate a node reached from `parent`.
    pub(crate) fn child(&mut self, cell: Cell, parent: NodeId) -> NodeId {
        self.alloc(cell, parent.0)
    }

    fn alloc(&mut self, cell: Cell, parent: usize) -> NodeId {
        self.nodes.push(ArenaNode { cell, parent });
        NodeId(self.nodes.len() - 1)
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The cell stored in node `id`.
    #[inline]
    pub fn cell(&self, id: NodeId) -> Cell {
        self.nodes[id.0].cell
    }

    /// The parent of node `id`, or `None` for a root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes[id.0].parent {
            NO_PARENT => None,
            p => Some(NodeId(p)),
        }
    }

    /// The cells from the root to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(n) = cur {
            path.push(self.cell(n));
            cur = self.parent(n);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_walks_back_to_root() {
        let mut a = PathArena::new();
        let r = a.root(Cell::new(0, 0));
        let b = a.child(Cell::new(0, 1), r);
        let c = a.child(Cell::new(1, 1), b);
        let side = a.child(Cell::new(1, 0), r);
        assert_eq!(a.len(), 4);
        assert_eq!(
            a.path(c),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(a.path(side), vec![Cell::new(0, 0), Cell::new(1, 0)]);
        assert_eq!(a.path(r), vec![Cell::new(0, 0)]);
        assert_eq!(a.parent(r), None);
        assert_eq!(a.parent(c), Some(b));
    }

    #[test]
    fn ids_follow_allocation_order() {
        let mut a = PathArena::new();
        let r = a.root(Cell::new(0, 0));
        let b = a.child(Cell::new(0, 1), r);
        assert!(r < b);
        assert_eq!(b.index(), 1);
    }
}
