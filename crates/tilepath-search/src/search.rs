//! Best-first (A*-shaped) least-cost search with closed-set reopening.
//!
//! Nodes live in an arena owned by [`PathSearch`]; the open and closed sets
//! only hold [`NodeId`] handles. A closed cell reached again more cheaply is
//! reopened with a fresh node, so earlier nodes that name the superseded one
//! as their parent stay valid.
//!
//! Accumulated costs saturate at `i32::MAX` instead of overflowing.

use std::collections::BinaryHeap;

use tilepath_core::{Dims, GridCell};

use crate::node::{NodeId, NodeRef, SearchNode, Slot};
use crate::traits::CostMap;

/// Counters for the most recent [`PathSearch::find_path`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes moved from the open set to the closed set.
    pub expanded: usize,
    /// Closed cells moved back to the open set.
    pub reopened: usize,
    /// Open nodes whose cost was lowered in place.
    pub improved: usize,
    /// Arena nodes created.
    pub created: usize,
}

/// Reusable search engine.
///
/// Keeps its node arena, heap and per-cell table between queries so that
/// repeated searches over the same grid do not reallocate.
#[derive(Debug, Default)]
pub struct PathSearch {
    nodes: Vec<SearchNode>,
    slots: Vec<Slot>,
    open: BinaryHeap<NodeRef>,
    seq: u64,
    stats: SearchStats,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the last query.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Arena of the last query. Empty if the last query returned early.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Compute a least-cost path from `start` to `end`.
    ///
    /// Returns every cell from `start` to `end` inclusive, moving in the
    /// four cardinal directions only. The result is empty when either
    /// endpoint is not valid, when `start == end`, or when no route exists.
    pub fn find_path<M: CostMap + ?Sized>(
        &mut self,
        map: &M,
        start: GridCell,
        end: GridCell,
    ) -> Vec<GridCell> {
        self.reset(map.dimensions());

        if !map.is_valid(start) || !map.is_valid(end) || start == end {
            log::debug!("search {start} -> {end}: nothing to do");
            return Vec::new();
        }

        let dims = map.dimensions();
        let Some(si) = dims.index(start) else {
            return Vec::new();
        };
        let root = self.admit(start, 0, map.estimate(start, end), None);
        self.slots[si] = Slot::Open(root);

        let path = self.run(map, dims, end);
        log::debug!(
            "search {start} -> {end}: {} cells, {} expanded, {} reopened",
            path.len(),
            self.stats.expanded,
            self.stats.reopened
        );
        path
    }

    fn run<M: CostMap + ?Sized>(&mut self, map: &M, dims: Dims, end: GridCell) -> Vec<GridCell> {
        while let Some(entry) = self.open.pop() {
            let cur = entry.id;
            let node = &self.nodes[cur.0];
            // Skip entries superseded by an in-place improvement.
            if node.seq != entry.seq {
                continue;
            }
            let cell = node.cell;
            let cur_g = node.g;
            let Some(ci) = dims.index(cell) else {
                continue;
            };
            self.slots[ci] = Slot::Closed(cur);
            self.stats.expanded += 1;

            if cell == end {
                return self.build_path(cur);
            }

            for next in cell.neighbors_4() {
                let Some(cost) = map.cost_of(next) else {
                    continue;
                };
                let Some(ni) = dims.index(next) else {
                    continue;
                };
                let g = cur_g.saturating_add(cost);
                let h = map.estimate(next, end);

                let slot = self.slots[ni];
                match slot {
                    Slot::Closed(old) => {
                        if g.saturating_add(h) < self.nodes[old.0].f() {
                            log::trace!("reopen {next}: g {} -> {g}", self.nodes[old.0].g);
                            let id = self.admit(next, g, h, Some(cur));
                            self.slots[ni] = Slot::Open(id);
                            self.stats.reopened += 1;
                        }
                    }
                    Slot::Open(old) => {
                        if g.saturating_add(h) < self.nodes[old.0].f() {
                            log::trace!("improve {next}: g {} -> {g}", self.nodes[old.0].g);
                            self.improve(old, g, h, cur);
                        }
                    }
                    Slot::Unseen => {
                        let id = self.admit(next, g, h, Some(cur));
                        self.slots[ni] = Slot::Open(id);
                    }
                }
            }
        }
        Vec::new()
    }

    /// Clear per-query state, keeping allocations.
    fn reset(&mut self, dims: Dims) {
        self.nodes.clear();
        self.open.clear();
        self.slots.clear();
        self.slots.resize(dims.len(), Slot::Unseen);
        self.seq = 0;
        self.stats = SearchStats::default();
    }

    fn next_seq(&mut self) -> u64 {
        let s = self.seq;
        self.seq += 1;
        s
    }

    /// Create a node and push it onto the open heap.
    fn admit(&mut self, cell: GridCell, g: i32, h: i32, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let seq = self.next_seq();
        self.nodes.push(SearchNode {
            cell,
            g,
            h,
            parent,
            seq,
        });
        self.open.push(NodeRef {
            id,
            f: g.saturating_add(h),
            seq,
        });
        self.stats.created += 1;
        id
    }

    /// Overwrite an open node's costs and parent, and requeue it.
    fn improve(&mut self, id: NodeId, g: i32, h: i32, parent: NodeId) {
        let seq = self.next_seq();
        let node = &mut self.nodes[id.0];
        node.g = g;
        node.h = h;
        node.parent = Some(parent);
        node.seq = seq;
        self.open.push(NodeRef {
            id,
            f: g.saturating_add(h),
            seq,
        });
        self.stats.improved += 1;
    }

    fn build_path(&self, last: NodeId) -> Vec<GridCell> {
        let mut path = Vec::new();
        let mut cur = Some(last);
        while let Some(id) = cur {
            let node = &self.nodes[id.0];
            path.push(node.cell);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

/// One-shot convenience wrapper around [`PathSearch::find_path`].
pub fn find_path<M: CostMap + ?Sized>(map: &M, start: GridCell, end: GridCell) -> Vec<GridCell> {
    PathSearch::new().find_path(map, start, end)
}

/// Cost of walking `path`: the sum of entry costs of every cell after the
/// first.
///
/// Returns `None` if a cell is not valid, two consecutive cells are not
/// cardinal neighbours, or the sum overflows `i32`. An empty path costs
/// nothing.
pub fn path_cost<M: CostMap + ?Sized>(map: &M, path: &[GridCell]) -> Option<i32> {
    let Some(&first) = path.first() else {
        return Some(0);
    };
    if !map.is_valid(first) {
        return None;
    }
    let mut total: i32 = 0;
    for w in path.windows(2) {
        if !w[0].is_adjacent(w[1]) {
            return None;
        }
        total = total.checked_add(map.cost_of(w[1])?)?;
    }
    Some(total)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 9,
            reopened: 1,
            improved: 3,
            created: 9,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
