//! A* search on a 2-D unit-cost grid
//!
//! `AStarPlanner` owns the grid model, the per-run score state and the
//! most recent path. Runs are deterministic: every run starts from a full
//! reset of the transient state, and frontier ties break by cell index.

use nalgebra::DMatrix;

use crate::common::{CellKind, GridCoord, GridError, GridPath, GridResult, GridView};
use crate::path_planning::frontier::Frontier;
use crate::utils::Grid;

/// A* planner over a fixed-size grid of unit-cost cells.
///
/// The caller configures walls, start and end, then calls [`run`].
/// Afterwards the result is observed through [`path`] or the per-cell
/// queries. Start and end are expected to be non-wall cells when they are
/// set; that check belongs to the input layer, the planner trusts its
/// direct caller.
///
/// [`run`]: AStarPlanner::run
/// [`path`]: AStarPlanner::path
#[derive(Debug)]
pub struct AStarPlanner {
    grid: Grid,
    start: Option<usize>,
    end: Option<usize>,
    path: Option<GridPath>,
    // Per-run search state, parallel to the cell arena. g is the cheapest
    // known cost from the start, h the heuristic estimate to the end, and
    // f = g + h the frontier ordering key.
    g: DMatrix<f64>,
    h: DMatrix<f64>,
    f: DMatrix<f64>,
    predecessor: Vec<Option<usize>>,
}

impl AStarPlanner {
    /// Create a planner for a `width x height` grid with no walls and
    /// unset start/end.
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        let grid = Grid::new(width, height)?;
        let g = DMatrix::from_element(width as usize, height as usize, f64::INFINITY);
        let h = g.clone();
        let f = g.clone();
        let predecessor = vec![None; grid.len()];

        Ok(AStarPlanner {
            grid,
            start: None,
            end: None,
            path: None,
            g,
            h,
            f,
            predecessor,
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Set or unset a wall. Fails with `OutOfBounds` and leaves the grid
    /// untouched when (x, y) is outside the grid.
    pub fn set_wall(&mut self, x: i32, y: i32, wall: bool) -> GridResult<()> {
        self.grid.set_wall(x, y, wall)?;
        self.path = None;
        Ok(())
    }

    /// Bind the start cell. Rebinds only; the wall status of the target
    /// cell is the input layer's concern.
    pub fn set_start(&mut self, x: i32, y: i32) -> GridResult<()> {
        let index = self.grid.index(x, y)?;
        self.start = Some(index);
        self.path = None;
        Ok(())
    }

    /// Bind the end cell. Same contract as [`set_start`].
    ///
    /// [`set_start`]: AStarPlanner::set_start
    pub fn set_end(&mut self, x: i32, y: i32) -> GridResult<()> {
        let index = self.grid.index(x, y)?;
        self.end = Some(index);
        self.path = None;
        Ok(())
    }

    /// Drop all walls, both bindings and any previous result.
    pub fn clear(&mut self) {
        self.grid.clear_walls();
        self.start = None;
        self.end = None;
        self.path = None;
    }

    pub fn start(&self) -> Option<GridCoord> {
        self.start.map(|index| {
            let cell = self.grid.cell(index);
            GridCoord::new(cell.x, cell.y)
        })
    }

    pub fn end(&self) -> Option<GridCoord> {
        self.end.map(|index| {
            let cell = self.grid.cell(index);
            GridCoord::new(cell.x, cell.y)
        })
    }

    /// The most recent successful route, start to end inclusive. `None`
    /// until a successful run, and again after a failed run or any
    /// mutation.
    pub fn path(&self) -> Option<&GridPath> {
        self.path.as_ref()
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.grid.is_wall(x, y)
    }

    pub fn is_start(&self, x: i32, y: i32) -> bool {
        self.start.map_or(false, |index| {
            let cell = self.grid.cell(index);
            cell.x == x && cell.y == y
        })
    }

    pub fn is_end(&self, x: i32, y: i32) -> bool {
        self.end.map_or(false, |index| {
            let cell = self.grid.cell(index);
            cell.x == x && cell.y == y
        })
    }

    /// True iff the cell appears on the most recent successful path.
    pub fn is_on_path(&self, x: i32, y: i32) -> bool {
        self.path.as_ref().map_or(false, |path| path.contains(x, y))
    }

    /// Per-cell classification for renderers. Priority follows the paint
    /// order: wall, start, end, path, open.
    pub fn cell_kind(&self, x: i32, y: i32) -> CellKind {
        if self.is_wall(x, y) {
            CellKind::Wall
        } else if self.is_start(x, y) {
            CellKind::Start
        } else if self.is_end(x, y) {
            CellKind::End
        } else if self.is_on_path(x, y) {
            CellKind::OnPath
        } else {
            CellKind::Open
        }
    }

    /// Execute the search. Requires both start and end to be bound,
    /// otherwise fails with `NotConfigured`.
    ///
    /// An exhausted frontier is a normal terminal outcome, not an error:
    /// the call returns `Ok` and [`path`] yields `None` afterwards.
    ///
    /// [`path`]: AStarPlanner::path
    pub fn run(&mut self) -> GridResult<()> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(GridError::NotConfigured(
                    "both start and end must be set before running".to_string(),
                ))
            }
        };

        // Full reset keeps reruns independent of whatever an earlier run
        // left behind.
        self.reset_scores(end);

        let (sx, sy) = {
            let cell = self.grid.cell(start);
            (cell.x as usize, cell.y as usize)
        };
        self.g[(sx, sy)] = 0.0;
        self.f[(sx, sy)] = self.h[(sx, sy)];

        let mut open_set = Frontier::new();
        open_set.insert(self.f[(sx, sy)], start);

        while let Some(current) = open_set.peek() {
            if current == end {
                self.path = Some(self.reconstruct(end));
                return Ok(());
            }
            open_set.pop();

            let (cx, cy) = {
                let cell = self.grid.cell(current);
                (cell.x as usize, cell.y as usize)
            };
            let tentative_g = self.g[(cx, cy)] + 1.0;

            for &neighbour in &self.grid.cell(current).neighbours {
                let ncell = self.grid.cell(neighbour);
                if ncell.wall {
                    continue;
                }
                let (nx, ny) = (ncell.x as usize, ncell.y as usize);
                if tentative_g < self.g[(nx, ny)] {
                    self.predecessor[neighbour] = Some(current);
                    self.g[(nx, ny)] = tentative_g;
                    self.f[(nx, ny)] = tentative_g + self.h[(nx, ny)];
                    // An improved member keeps its stale queue slot; the
                    // latest scores are read back when it surfaces.
                    if !open_set.contains(neighbour) {
                        open_set.insert(self.f[(nx, ny)], neighbour);
                    }
                }
            }
        }

        // Frontier exhausted: no route between start and end.
        self.path = None;
        Ok(())
    }

    /// Reset every cell's transient search state against the current end.
    fn reset_scores(&mut self, end: usize) {
        let end_coord = {
            let cell = self.grid.cell(end);
            GridCoord::new(cell.x, cell.y)
        };
        self.g.fill(f64::INFINITY);
        self.f.fill(f64::INFINITY);
        for index in 0..self.grid.len() {
            let cell = self.grid.cell(index);
            self.h[(cell.x as usize, cell.y as usize)] =
                heuristic(GridCoord::new(cell.x, cell.y), end_coord);
            self.predecessor[index] = None;
        }
        self.path = None;
    }

    /// Walk predecessor links from the end back to the cell with no
    /// predecessor (the start), then reverse so the route reads start to
    /// end inclusive. Only called once the end cell was reached.
    fn reconstruct(&self, end: usize) -> GridPath {
        let mut cells = Vec::new();
        let mut current = Some(end);
        while let Some(index) = current {
            let cell = self.grid.cell(index);
            cells.push(GridCoord::new(cell.x, cell.y));
            current = self.predecessor[index];
        }
        cells.reverse();
        GridPath::from_cells(cells)
    }
}

impl GridView for AStarPlanner {
    fn width(&self) -> i32 {
        AStarPlanner::width(self)
    }

    fn height(&self) -> i32 {
        AStarPlanner::height(self)
    }

    fn cell_kind(&self, x: i32, y: i32) -> CellKind {
        AStarPlanner::cell_kind(self, x, y)
    }
}

/// Straight-line distance from a cell to the end, rounded up.
///
/// Ceil keeps the estimate integral on a unit-cost grid while staying
/// admissible: any 4-connected route is at least as long as the Euclidean
/// distance, so the first time the end is popped its g is optimal.
fn heuristic(cell: GridCoord, end: GridCoord) -> f64 {
    cell.distance(&end).ceil()
}
