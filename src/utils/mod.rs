//! Utility modules for grid_astar

pub mod grid;
pub mod visualization;

pub use grid::*;
pub use visualization::{colors, PathStyle, PointStyle, Visualizer};
