//! Visualization utilities for grid_astar
//!
//! Provides a unified interface for plotting grids and paths using gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{CellKind, GridPath, GridView};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const WALL: &str = BLACK;
    pub const START: &str = GREEN;
    pub const END: &str = BLUE;
    pub const PATH: &str = RED;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [cells]".to_string(),
            y_label: "Y [cells]".to_string(),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X axis label
    pub fn set_x_label(&mut self, label: &str) -> &mut Self {
        self.x_label = label.to_string();
        self
    }

    /// Set Y axis label
    pub fn set_y_label(&mut self, label: &str) -> &mut Self {
        self.y_label = label.to_string();
        self
    }

    /// Get mutable reference to the internal figure for advanced usage
    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    /// Paint a grid view and an optional route onto a single axes set.
    ///
    /// Walls, start and end come from the view's per-cell classification;
    /// the route is drawn as a line over them.
    pub fn plot_scene<V: GridView>(&mut self, view: &V, path: Option<&GridPath>) -> &mut Self {
        let mut wall_x = Vec::new();
        let mut wall_y = Vec::new();
        let mut start_x = Vec::new();
        let mut start_y = Vec::new();
        let mut end_x = Vec::new();
        let mut end_y = Vec::new();

        for y in 0..view.height() {
            for x in 0..view.width() {
                match view.cell_kind(x, y) {
                    CellKind::Wall => {
                        wall_x.push(x as f64);
                        wall_y.push(y as f64);
                    }
                    CellKind::Start => {
                        start_x.push(x as f64);
                        start_y.push(y as f64);
                    }
                    CellKind::End => {
                        end_x.push(x as f64);
                        end_y.push(y as f64);
                    }
                    _ => {}
                }
            }
        }

        let (width, height) = (view.width() as f64, view.height() as f64);
        let axes = self.figure.axes2d();

        axes.set_title(&self.title, &[]);
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);
        axes.set_x_range(AutoOption::Fix(-1.0), AutoOption::Fix(width));
        axes.set_y_range(AutoOption::Fix(-1.0), AutoOption::Fix(height));
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        if !wall_x.is_empty() {
            axes.points(
                &wall_x,
                &wall_y,
                &[
                    Caption("Walls"),
                    Color(colors::WALL),
                    PointSymbol('S'),
                    PointSize(1.0),
                ],
            );
        }
        if let Some(path) = path {
            let style = PathStyle::default();
            axes.lines(
                &path.x_coords(),
                &path.y_coords(),
                &[
                    Caption(&style.caption),
                    Color(&style.color),
                    LineWidth(style.line_width),
                ],
            );
        }
        if !start_x.is_empty() {
            let style = PointStyle::new(colors::START, "Start").with_size(1.5);
            axes.points(
                &start_x,
                &start_y,
                &[
                    Caption(&style.caption),
                    Color(&style.color),
                    PointSymbol(style.symbol),
                    PointSize(style.size),
                ],
            );
        }
        if !end_x.is_empty() {
            let style = PointStyle::new(colors::END, "End").with_size(1.5);
            axes.points(
                &end_x,
                &end_y,
                &[
                    Caption(&style.caption),
                    Color(&style.color),
                    PointSymbol(style.symbol),
                    PointSize(style.size),
                ],
            );
        }

        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> Result<(), String> {
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| e.to_string())
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.title.is_empty());
        assert_eq!(vis.x_label, "X [cells]");
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_point_style() {
        let style = PointStyle::new(colors::START, "Start")
            .with_size(2.0)
            .with_symbol('T');
        assert_eq!(style.size, 2.0);
        assert_eq!(style.symbol, 'T');
    }
}
