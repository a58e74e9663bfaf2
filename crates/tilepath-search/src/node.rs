use tilepath_core::GridCell;

/// Stable handle into the node arena of a [`PathSearch`](crate::PathSearch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub cell: GridCell,
    /// Accumulated cost from the start.
    pub g: i32,
    /// Estimated remaining cost to the goal.
    pub h: i32,
    pub parent: Option<NodeId>,
    /// Sequence number of the most recent open-set push for this node.
    pub(crate) seq: u64,
}

impl SearchNode {
    /// Total estimated cost `g + h`, saturating at `i32::MAX`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

// ---------------------------------------------------------------------------
// Per-cell membership
// ---------------------------------------------------------------------------

/// Which set a cell currently belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Slot {
    #[default]
    Unseen,
    Open(NodeId),
    Closed(NodeId),
}

// ---------------------------------------------------------------------------
// Open-set heap entry
// ---------------------------------------------------------------------------

/// Reference into the arena, ordered for use in `BinaryHeap` so that the
/// smallest `f` pops first and, among equal `f`, the earliest push.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) id: NodeId,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn r(id: usize, f: i32, seq: u64) -> NodeRef {
        NodeRef {
            id: NodeId(id),
            f,
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(r(0, 5, 0));
        heap.push(r(1, 3, 1));
        heap.push(r(2, 5, 2));
        heap.push(r(3, 3, 3));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.id.0).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn f_is_sum() {
        let n = SearchNode {
            cell: GridCell::ZERO,
            g: 4,
            h: 3,
            parent: None,
            seq: 0,
        };
        assert_eq!(n.f(), 7);
    }
}
