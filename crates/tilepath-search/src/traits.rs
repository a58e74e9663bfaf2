use tilepath_core::{CostGrid, Dims, GridCell};

use crate::heuristic;

/// Read-only cost lookup that the search runs over.
pub trait CostMap {
    /// Grid dimensions; every valid cell must lie inside them.
    fn dimensions(&self) -> Dims;

    /// Cost of entering `c`, or `None` if `c` cannot be entered.
    fn cost_of(&self, c: GridCell) -> Option<i32>;

    /// Whether `c` can be entered.
    fn is_valid(&self, c: GridCell) -> bool {
        self.cost_of(c).is_some()
    }

    /// Estimated remaining cost from `from` to `to`.
    fn estimate(&self, from: GridCell, to: GridCell) -> i32 {
        heuristic::euclidean(from, to)
    }
}

impl CostMap for CostGrid {
    #[inline]
    fn dimensions(&self) -> Dims {
        CostGrid::dimensions(self)
    }

    #[inline]
    fn cost_of(&self, c: GridCell) -> Option<i32> {
        CostGrid::cost_of(self, c)
    }

    #[inline]
    fn is_valid(&self, c: GridCell) -> bool {
        CostGrid::is_valid(self, c)
    }
}
