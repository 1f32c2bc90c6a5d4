use crate::config::GameConfig;
use crate::model::{Cell, Direction};

/// Picks the step direction for a drag from `start` to `current`.
///
/// Returns `None` until the drag has covered `cfg.lock_distance` grid units.
/// Near-equal row/col deltas (ratio strictly inside the diagonal band) lock a
/// diagonal; anything else locks the dominant axis, columns winning ties.
pub fn lock_direction(start: Cell, current: Cell, cfg: &GameConfig) -> Option<Direction> {
    let (dr, dc) = start.delta_to(current);
    if dr == 0 && dc == 0 {
        return None;
    }
    let distance = ((dr * dr + dc * dc) as f64).sqrt();
    if distance < cfg.lock_distance {
        return None;
    }
    let ar = dr.abs() as f64;
    let ac = dc.abs() as f64;
    if ar > 0.0 && ac > 0.0 {
        let ratio = ar / ac;
        if ratio > cfg.diagonal_band_min && ratio < cfg.diagonal_band_max {
            return Direction::new(dr.signum(), dc.signum());
        }
    }
    if ar > ac {
        Direction::new(dr.signum(), 0)
    } else {
        Direction::new(0, dc.signum())
    }
}
