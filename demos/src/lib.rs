//! Command-line driver and debug rendering for tilepath.

pub mod cli;
pub mod render;
