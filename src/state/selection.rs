// Drag state and the selection path it produces.
use crate::config::GameConfig;
use crate::model::{Cell, Direction};

use super::direction::lock_direction;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub active: bool,
    /// Cell under pointer-down; `None` when the press missed the grid.
    pub start: Option<Cell>,
    /// Set once, then fixed until the drag ends.
    pub direction: Option<Direction>,
}

impl Drag {
    pub fn begin(start: Option<Cell>) -> Self {
        Self {
            active: true,
            start,
            direction: None,
        }
    }

    /// Locks a direction if none is set yet, then rebuilds the path toward `current`.
    /// `None` when the drag has no start cell.
    pub fn path_to(&mut self, current: Cell, cfg: &GameConfig) -> Option<Vec<Cell>> {
        let start = self.start?;
        if self.direction.is_none() {
            self.direction = lock_direction(start, current, cfg);
        }
        Some(match self.direction {
            Some(dir) => build_path(start, dir, steps_toward(start, dir, current)),
            None => vec![start],
        })
    }
}

/// Whole steps along `dir` covered by the projection of start->current. Never negative.
pub fn steps_toward(start: Cell, dir: Direction, current: Cell) -> u32 {
    let (dr, dc) = start.delta_to(current);
    let dot = dr * dir.d_row + dc * dir.d_col;
    let steps = if dir.is_diagonal() {
        dot.div_euclid(2)
    } else {
        dot
    };
    steps.max(0) as u32
}

/// `start` plus up to `steps` cells along `dir`, cut short at the grid edge.
pub fn build_path(start: Cell, dir: Direction, steps: u32) -> Vec<Cell> {
    (0..=steps).map_while(|i| start.step(dir, i)).collect()
}
