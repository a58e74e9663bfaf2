//! Geometry primitives: [`GridCell`], [`Dims`] and host-space translation.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// A grid coordinate. X is the column and grows right, Y is the row and
/// grows down. Both are zero-based.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Cardinal offsets in expansion order: east, north, west, south.
pub const CARDINALS: [GridCell; 4] = [
    GridCell::new(1, 0),
    GridCell::new(0, -1),
    GridCell::new(-1, 0),
    GridCell::new(0, 1),
];

impl GridCell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours, in [`CARDINALS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [GridCell; 4] {
        CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: GridCell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl PartialOrd for GridCell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for GridCell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridCell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. A cell is in bounds iff `0 <= x < cols` and
/// `0 <= y < rows`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: GridCell) -> bool {
        c.x >= 0 && c.x < self.cols && c.y >= 0 && c.y < self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: GridCell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.cols as usize + c.x as usize)
    }

    /// Row-major iterator over every cell.
    pub fn iter(self) -> impl Iterator<Item = GridCell> {
        let cols = self.cols.max(0);
        (0..self.rows.max(0)).flat_map(move |y| (0..cols).map(move |x| GridCell::new(x, y)))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Host-space rectangle that the whole grid is stretched over.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    /// A 1024x768 screen centred on the origin.
    fn default() -> Self {
        Self {
            left: -512.0,
            top: -384.0,
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Translate a host-space point into the grid cell under it.
///
/// Cells are a whole number of host units wide (`width / cols`, integer
/// division) and the result is truncated toward zero. Returns
/// [`GridCell::ZERO`] for an empty grid or a viewport narrower than one
/// unit per cell. The result is not bounds-checked.
pub fn cell_from_point(x: f32, y: f32, dims: Dims, view: &Viewport) -> GridCell {
    if dims.is_empty() {
        return GridCell::ZERO;
    }
    let cell_w = view.width as i32 / dims.cols;
    let cell_h = view.height as i32 / dims.rows;
    if cell_w <= 0 || cell_h <= 0 {
        return GridCell::ZERO;
    }
    GridCell::new(
        ((x - view.left) / cell_w as f32) as i32,
        ((y - view.top) / cell_h as f32) as i32,
    )
}
