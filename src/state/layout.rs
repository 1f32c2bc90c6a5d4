// Canvas layout: cell size and grid origin, recomputed on every resize.
use crate::model::{Cell, GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub cell: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::fit(0.0, 0.0, 0.9)
    }
}

impl Layout {
    /// Largest whole-pixel cell that fits `fill_ratio` of the canvas, grid centered.
    /// The grid is never pushed above the top edge on short canvases.
    pub fn fit(width: f64, height: f64, fill_ratio: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let usable_w = width * fill_ratio;
        let usable_h = height * fill_ratio;
        let cell = (usable_w / GRID_COLS as f64)
            .min(usable_h / GRID_ROWS as f64)
            .floor()
            .max(0.0);
        Self {
            width,
            height,
            cell,
            origin_x: (width - GRID_COLS as f64 * cell) / 2.0,
            origin_y: ((height - GRID_ROWS as f64 * cell) / 2.0).max(0.0),
        }
    }

    /// Maps canvas-local pixel coordinates to a grid cell.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        if self.cell <= 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let c = ((x - self.origin_x) / self.cell).floor();
        let r = ((y - self.origin_y) / self.cell).floor();
        if r >= 0.0 && c >= 0.0 && r < GRID_ROWS as f64 && c < GRID_COLS as f64 {
            Some(Cell::new(r as u32, c as u32))
        } else {
            None
        }
    }

    /// Same as `cell_at` but for client coordinates, given the canvas rect's top-left.
    pub fn cell_at_client(&self, client_x: f64, client_y: f64, left: f64, top: f64) -> Option<Cell> {
        self.cell_at(client_x - left, client_y - top)
    }

    /// (x, y, w, h) of a cell in canvas pixels.
    pub fn cell_rect(&self, cell: Cell) -> (f64, f64, f64, f64) {
        (
            self.origin_x + cell.col as f64 * self.cell,
            self.origin_y + cell.row as f64 * self.cell,
            self.cell,
            self.cell,
        )
    }

    pub fn cell_center(&self, cell: Cell) -> (f64, f64) {
        let (x, y, w, h) = self.cell_rect(cell);
        (x + w / 2.0, y + h / 2.0)
    }
}
