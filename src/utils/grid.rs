//! Grid model for the search engine
//!
//! The grid owns every cell in a row-major arena. Cells carry the static
//! per-cell data (coordinates, wall flag, neighbour indices); the per-run
//! search state lives with the planner.

use itertools::iproduct;

use crate::common::{GridError, GridResult};

// 4-connected motion model: right, up, left, down
const MOTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A single grid cell
#[derive(Debug, Clone)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    /// Persistent across runs until toggled; never written by the search
    pub wall: bool,
    /// Arena indices of the in-bounds cardinal neighbours, fixed at
    /// construction. Walls change passability, not adjacency.
    pub neighbours: Vec<usize>,
}

/// Fixed-size 2-D cell arena.
///
/// Dimensions are immutable for the grid's lifetime; cells are created
/// once and reused across runs.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width x height` grid and precompute neighbour lists.
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let mut cells: Vec<Cell> = iproduct!(0..height, 0..width)
            .map(|(y, x)| Cell {
                x,
                y,
                wall: false,
                neighbours: Vec::new(),
            })
            .collect();

        for index in 0..cells.len() {
            let (x, y) = (cells[index].x, cells[index].y);
            let neighbours: Vec<usize> = MOTIONS
                .iter()
                .filter_map(|&(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx >= 0 && nx < width && ny >= 0 && ny < height {
                        Some((ny * width + nx) as usize)
                    } else {
                        None
                    }
                })
                .collect();
            cells[index].neighbours = neighbours;
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the arena
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if (x, y) lies within the grid bounds
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Arena index of the cell at (x, y), row-major
    pub fn index(&self, x: i32, y: i32) -> GridResult<usize> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds(format!(
                "({}, {}) outside {}x{} grid",
                x, y, self.width, self.height
            )));
        }
        Ok((y * self.width + x) as usize)
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Set or unset the wall flag at (x, y)
    pub fn set_wall(&mut self, x: i32, y: i32, wall: bool) -> GridResult<()> {
        let index = self.index(x, y)?;
        self.cells[index].wall = wall;
        Ok(())
    }

    /// Wall query, total over all coordinates (false outside bounds)
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.cells[i].wall).unwrap_or(false)
    }

    /// Unset every wall flag
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.wall = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension(_))
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension(_))
        ));
        assert!(matches!(
            Grid::new(-2, 3),
            Err(GridError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.index(0, 0).unwrap(), 0);
        assert_eq!(grid.index(3, 0).unwrap(), 3);
        assert_eq!(grid.index(0, 1).unwrap(), 4);
        assert_eq!(grid.index(3, 2).unwrap(), 11);
        assert!(grid.index(4, 0).is_err());
        assert!(grid.index(0, 3).is_err());
        assert!(grid.index(-1, 0).is_err());
    }

    #[test]
    fn test_cell_coordinates_match_index() {
        let grid = Grid::new(4, 3).unwrap();
        for index in 0..grid.len() {
            let cell = grid.cell(index);
            assert_eq!(grid.index(cell.x, cell.y).unwrap(), index);
        }
    }

    #[test]
    fn test_neighbour_lists() {
        let grid = Grid::new(4, 3).unwrap();

        // corner has two neighbours
        let corner = grid.cell(grid.index(0, 0).unwrap());
        assert_eq!(corner.neighbours.len(), 2);

        // edge has three
        let edge = grid.cell(grid.index(1, 0).unwrap());
        assert_eq!(edge.neighbours.len(), 3);

        // interior has four, in motion-model order: right, up, left, down
        let interior = grid.cell(grid.index(1, 1).unwrap());
        assert_eq!(
            interior.neighbours,
            vec![
                grid.index(2, 1).unwrap(),
                grid.index(1, 2).unwrap(),
                grid.index(0, 1).unwrap(),
                grid.index(1, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_wall_toggle() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(!grid.is_wall(1, 1));
        grid.set_wall(1, 1, true).unwrap();
        assert!(grid.is_wall(1, 1));
        grid.set_wall(1, 1, false).unwrap();
        assert!(!grid.is_wall(1, 1));
    }

    #[test]
    fn test_wall_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.set_wall(3, 0, true),
            Err(GridError::OutOfBounds(_))
        ));
        // the query stays total
        assert!(!grid.is_wall(3, 0));
        assert!(!grid.is_wall(-1, -1));
    }

    #[test]
    fn test_walls_do_not_change_adjacency() {
        let mut grid = Grid::new(3, 3).unwrap();
        let before = grid.cell(grid.index(1, 1).unwrap()).neighbours.clone();
        grid.set_wall(2, 1, true).unwrap();
        assert_eq!(grid.cell(grid.index(1, 1).unwrap()).neighbours, before);
    }

    #[test]
    fn test_clear_walls() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_wall(0, 0, true).unwrap();
        grid.set_wall(2, 2, true).unwrap();
        grid.clear_walls();
        for y in 0..3 {
            for x in 0..3 {
                assert!(!grid.is_wall(x, y));
            }
        }
    }
}
