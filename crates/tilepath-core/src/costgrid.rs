//! Terrain cost grids loaded from text.
//!
//! A [`CostGrid`] is built once from a terrain layout and a [`Legend`] and is
//! read-only afterwards. Each terrain character becomes the legend cost for
//! that character, or [`BLOCKED`] if the legend has no entry for it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::{LoadOptions, ParseMode};
use crate::error::GridError;
use crate::geom::{Dims, GridCell};
use crate::legend::Legend;

/// Cost sentinel for impassable cells.
pub const BLOCKED: i32 = -1;

/// Read-only grid of traversal costs.
#[derive(Debug, Clone, Default)]
pub struct CostGrid {
    costs: HashMap<GridCell, i32>,
    dims: Dims,
}

impl CostGrid {
    /// Parse a terrain layout and its legend with default options.
    pub fn load(terrain: &str, legend: &str) -> Result<Self, GridError> {
        Self::load_with(terrain, legend, &LoadOptions::default())
    }

    /// Parse a terrain layout and its legend.
    pub fn load_with(terrain: &str, legend: &str, opts: &LoadOptions) -> Result<Self, GridError> {
        let legend = Legend::parse_with(legend, opts)?;
        Self::from_legend(terrain, &legend, opts)
    }

    /// Read both files from disk and parse them.
    pub fn from_files(
        terrain_path: impl AsRef<Path>,
        legend_path: impl AsRef<Path>,
        opts: &LoadOptions,
    ) -> Result<Self, GridError> {
        let legend = read_source(legend_path.as_ref())?;
        let terrain = read_source(terrain_path.as_ref())?;
        Self::load_with(&terrain, &legend, opts)
    }

    /// Parse a terrain layout against an already-parsed legend.
    ///
    /// Each line is one row; `'\r'` characters are dropped and a trailing
    /// line terminator does not start a new row. In [`ParseMode::Compat`]
    /// the grid width is the width of the last row read, even if earlier
    /// rows were wider or narrower. In [`ParseMode::Strict`] every row must
    /// match the first row's width.
    pub fn from_legend(
        terrain: &str,
        legend: &Legend,
        opts: &LoadOptions,
    ) -> Result<Self, GridError> {
        let mut costs = HashMap::new();
        let mut rows = 0usize;
        let mut cols = 0usize;
        let mut first_width = None;
        let mut ragged = false;

        for (y, raw) in terrain.split_terminator('\n').enumerate() {
            let mut width = 0usize;
            for (x, ch) in raw.chars().filter(|&c| c != '\r').enumerate() {
                let cost = legend.get(ch).unwrap_or(BLOCKED);
                costs.insert(GridCell::new(x as i32, y as i32), cost);
                width = x + 1;
            }

            let expected = *first_width.get_or_insert(width);
            if expected != width {
                if opts.mode == ParseMode::Strict {
                    return Err(GridError::RaggedRow {
                        row: y + 1,
                        expected,
                        found: width,
                    });
                }
                ragged = true;
            }
            cols = width;
            rows = y + 1;
        }

        if ragged {
            log::warn!("terrain rows differ in width; using last row width {cols}");
        }

        let dims = Dims::new(rows as i32, cols as i32);
        log::debug!("loaded cost grid {dims} ({} cells)", costs.len());
        Ok(Self { costs, dims })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dimensions(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` can be entered: in bounds, present, and not blocked.
    #[inline]
    pub fn is_valid(&self, c: GridCell) -> bool {
        self.cost_of(c).is_some()
    }

    /// Cost of entering `c`, or `None` if `c` is not valid.
    #[inline]
    pub fn cost_of(&self, c: GridCell) -> Option<i32> {
        self.raw_cost(c).filter(|&v| v >= 0)
    }

    /// Stored cost of an in-bounds cell, including [`BLOCKED`].
    #[inline]
    pub fn raw_cost(&self, c: GridCell) -> Option<i32> {
        if !self.dims.contains(c) {
            return None;
        }
        self.costs.get(&c).copied()
    }

    /// Iterate over `(GridCell, cost)` pairs in row-major order, skipping
    /// in-bounds cells that no row defined.
    pub fn iter(&self) -> impl Iterator<Item = (GridCell, i32)> + '_ {
        self.dims
            .iter()
            .filter_map(|c| self.costs.get(&c).map(|&v| (c, v)))
    }
}

fn read_source(path: &Path) -> Result<String, GridError> {
    fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGEND: &str = ".=1\n~=3\n";

    #[test]
    fn load_and_size() {
        let g = CostGrid::load("...\n...\n", LEGEND).unwrap();
        assert_eq!(g.dimensions(), Dims::new(2, 3));
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.iter().count(), 6);
    }

    #[test]
    fn costs_and_blocked() {
        let g = CostGrid::load(".~#\r\n", LEGEND).unwrap();
        assert_eq!(g.cost_of(GridCell::new(0, 0)), Some(1));
        assert_eq!(g.cost_of(GridCell::new(1, 0)), Some(3));
        assert_eq!(g.raw_cost(GridCell::new(2, 0)), Some(BLOCKED));
        assert_eq!(g.cost_of(GridCell::new(2, 0)), None);
        assert!(!g.is_valid(GridCell::new(2, 0)));
        assert_eq!(g.cols(), 3);
    }

    #[test]
    fn negative_legend_cost_blocks() {
        let g = CostGrid::load("#.", "#=-1\n.=1").unwrap();
        assert!(!g.is_valid(GridCell::new(0, 0)));
        assert!(g.is_valid(GridCell::new(1, 0)));
    }

    #[test]
    fn zero_cost_is_valid() {
        let g = CostGrid::load("o", "o=0").unwrap();
        assert_eq!(g.cost_of(GridCell::ZERO), Some(0));
    }

    #[test]
    fn out_of_bounds_is_invalid() {
        let g = CostGrid::load("..\n..", LEGEND).unwrap();
        for c in [
            GridCell::new(-1, 0),
            GridCell::new(0, -1),
            GridCell::new(2, 0),
            GridCell::new(0, 2),
        ] {
            assert!(!g.is_valid(c), "{c} should be invalid");
            assert_eq!(g.raw_cost(c), None);
        }
    }

    #[test]
    fn empty_terrain() {
        let g = CostGrid::load("", LEGEND).unwrap();
        assert_eq!(g.dimensions(), Dims::new(0, 0));
        assert!(!g.is_valid(GridCell::ZERO));
    }

    #[test]
    fn compat_uses_last_row_width() {
        // A short last row shrinks the grid; cells past it become unreachable.
        let g = CostGrid::load("....\n..", LEGEND).unwrap();
        assert_eq!(g.dimensions(), Dims::new(2, 2));
        assert!(!g.is_valid(GridCell::new(3, 0)));

        // A long last row widens it; missing cells of earlier rows are absent.
        let g = CostGrid::load("..\n....", LEGEND).unwrap();
        assert_eq!(g.cols(), 4);
        assert!(g.is_valid(GridCell::new(3, 1)));
        assert!(!g.is_valid(GridCell::new(3, 0)));
        assert_eq!(g.raw_cost(GridCell::new(3, 0)), None);
        assert_eq!(g.iter().count(), 6);
    }

    #[test]
    fn strict_rejects_ragged_rows() {
        let err = CostGrid::load_with("...\n..\n", LEGEND, &LoadOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            GridError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
        assert!(CostGrid::load_with("...\n...\n", LEGEND, &LoadOptions::strict()).is_ok());
    }

    #[test]
    fn legend_errors_abort_load() {
        assert!(matches!(
            CostGrid::load("...", "oops"),
            Err(GridError::MissingSeparator { line: 1 })
        ));
    }

    #[test]
    fn iter_is_row_major() {
        let g = CostGrid::load(".~\n~.", LEGEND).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(
            items,
            vec![
                (GridCell::new(0, 0), 1),
                (GridCell::new(1, 0), 3),
                (GridCell::new(0, 1), 3),
                (GridCell::new(1, 1), 1),
            ]
        );
    }

    #[test]
    fn from_files_reads_disk() {
        let dir = std::env::temp_dir().join(format!("tilepath-costgrid-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let terrain = dir.join("grid.txt");
        let legend = dir.join("pathcost.txt");
        fs::write(&terrain, "..\r\n~.\r\n").unwrap();
        fs::write(&legend, ".=1\r\n~=3\r\n").unwrap();

        let g = CostGrid::from_files(&terrain, &legend, &LoadOptions::default()).unwrap();
        assert_eq!(g.dimensions(), Dims::new(2, 2));
        assert_eq!(g.cost_of(GridCell::new(0, 1)), Some(3));

        let missing = dir.join("nope.txt");
        let err = CostGrid::from_files(&missing, &legend, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, GridError::Io { ref path, .. } if path == &missing));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CostGrid>();
    }
}
