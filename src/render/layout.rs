use kurbo::{Rect, Vec2};

use crate::config::CellGeometry;
use crate::foundation::core::{Cell, GridSize};

/// Pixel placement of the grid, progress bar and canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// Grid being laid out.
    pub grid: GridSize,
    /// Pixel geometry.
    pub geometry: CellGeometry,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels, footer included.
    pub height: f64,
}

impl GridLayout {
    /// Compute the canvas size for `grid`.
    pub fn new(grid: GridSize, geometry: CellGeometry) -> Self {
        let g = geometry;
        let span = |n: usize| f64::from(g.cell) * n as f64 + f64::from(g.gap) * (n as f64 - 1.0);
        let width = 2.0 * f64::from(g.margin) + span(grid.cols);
        let height = 2.0 * f64::from(g.margin) + span(grid.rows) + f64::from(g.footer);
        Self {
            grid,
            geometry,
            width,
            height,
        }
    }

    fn pitch(&self) -> f64 {
        f64::from(self.geometry.cell + self.geometry.gap)
    }

    /// Left edge of column `col`.
    pub fn cell_x(&self, col: usize) -> f64 {
        f64::from(self.geometry.margin) + col as f64 * self.pitch()
    }

    /// Top edge of row `row`.
    pub fn cell_y(&self, row: usize) -> f64 {
        f64::from(self.geometry.margin) + row as f64 * self.pitch()
    }

    /// Pixel rectangle of `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let size = f64::from(self.geometry.cell);
        Rect::from_origin_size((self.cell_x(cell.col), self.cell_y(cell.row)), (size, size))
    }

    /// Horizontal shift that moves a block from `from_col` to `to_col`.
    pub fn col_offset(&self, from_col: usize, to_col: usize) -> Vec2 {
        Vec2::new(self.cell_x(to_col) - self.cell_x(from_col), 0.0)
    }

    /// Full-width track of the progress bar, sitting one margin above the bottom edge.
    pub fn progress_rect(&self) -> Rect {
        let g = self.geometry;
        let margin = f64::from(g.margin);
        let bar_h = f64::from(g.bar_height);
        Rect::from_origin_size(
            (margin, self.height - margin - bar_h),
            (self.width - 2.0 * margin, bar_h),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
