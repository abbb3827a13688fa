//! grid_astar - deterministic A* pathfinding on 2-D grids
//!
//! This crate provides a fixed-size grid of cells with toggleable walls,
//! an A* search engine with an admissible ceil-Euclidean heuristic, and
//! plotting utilities for rendering grids and paths.
//!
//! Given the same grid, start and end, a run always produces the same
//! path (or conclusively reports that none exists).

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{CellKind, GridCoord, GridPath, GridView};
pub use common::{GridError, GridResult};
pub use path_planning::AStarPlanner;
pub use utils::Grid;
