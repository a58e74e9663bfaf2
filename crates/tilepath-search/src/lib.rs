//! Least-cost path search over tilepath cost grids.
//!
//! - **A\*-style search** with a truncated Euclidean heuristic and
//!   closed-set reopening ([`PathSearch::find_path`], [`find_path`])
//! - **Facade** that keeps a path current as its endpoints move
//!   ([`Pathfinder`])
//!
//! Movement is restricted to the four cardinal directions. Entering a cell
//! costs that cell's grid cost; the start cell is free.
//!
//! The search runs over any [`CostMap`]; [`CostGrid`](tilepath_core::CostGrid)
//! implements it out of the box.

mod facade;
mod heuristic;
mod node;
mod search;
mod traits;

pub use facade::Pathfinder;
pub use heuristic::euclidean;
pub use node::{NodeId, SearchNode};
pub use search::{PathSearch, SearchStats, find_path, path_cost};
pub use traits::CostMap;
