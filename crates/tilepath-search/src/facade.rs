use std::sync::Arc;

use tilepath_core::{CostGrid, GridCell, Viewport, cell_from_point};

use crate::search::PathSearch;
use crate::traits::CostMap;

/// Holds a start and an end cell and keeps the path between them current.
///
/// Every call to [`set_start`](Self::set_start) or [`set_end`](Self::set_end)
/// runs a full search before returning. Both endpoints start at (0, 0) with
/// an empty path. The grid is shared, so several pathfinders can run over
/// the same [`CostGrid`].
#[derive(Debug)]
pub struct Pathfinder<M: CostMap = CostGrid> {
    grid: Arc<M>,
    search: PathSearch,
    start: GridCell,
    end: GridCell,
    path: Vec<GridCell>,
}

impl<M: CostMap> Pathfinder<M> {
    pub fn new(grid: Arc<M>) -> Self {
        Self {
            grid,
            search: PathSearch::new(),
            start: GridCell::ZERO,
            end: GridCell::ZERO,
            path: Vec::new(),
        }
    }

    /// Move the start cell and recompute the path.
    pub fn set_start(&mut self, cell: GridCell) {
        self.start = cell;
        self.update_path();
    }

    /// Move the end cell and recompute the path.
    pub fn set_end(&mut self, cell: GridCell) {
        self.end = cell;
        self.update_path();
    }

    /// Move the start to the cell under a host-space point.
    pub fn set_start_point(&mut self, x: f32, y: f32, view: &Viewport) {
        let cell = cell_from_point(x, y, self.grid.dimensions(), view);
        self.set_start(cell);
    }

    /// Move the end to the cell under a host-space point.
    pub fn set_end_point(&mut self, x: f32, y: f32, view: &Viewport) {
        let cell = cell_from_point(x, y, self.grid.dimensions(), view);
        self.set_end(cell);
    }

    pub fn start(&self) -> GridCell {
        self.start
    }

    pub fn end(&self) -> GridCell {
        self.end
    }

    /// The most recent path; empty if there is none.
    pub fn path(&self) -> &[GridCell] {
        &self.path
    }

    pub fn grid(&self) -> &Arc<M> {
        &self.grid
    }

    /// The search engine, for inspecting [`stats`](PathSearch::stats).
    pub fn search(&self) -> &PathSearch {
        &self.search
    }

    fn update_path(&mut self) {
        self.path = self.search.find_path(&*self.grid, self.start, self.end);
    }
}
