//! **tilepath-core** — grid cells and text-loaded cost grids.
//!
//! This crate provides the value types shared by the *tilepath* crates:
//! grid coordinates, grid dimensions, host-space translation, and the
//! [`CostGrid`] loaded from a terrain layout plus a character legend.

pub mod config;
pub mod costgrid;
pub mod error;
pub mod geom;
pub mod legend;

pub use config::{LoadOptions, ParseMode};
pub use costgrid::{BLOCKED, CostGrid};
pub use error::GridError;
pub use geom::{CARDINALS, Dims, GridCell, Viewport, cell_from_point};
pub use legend::Legend;
