// Tunables for drag locking, flash timing, layout and overlay colours.
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum Euclidean drag distance (grid units) before a direction locks.
    /// At 2.0 every neighbour of the start cell, diagonals included, stays unlocked.
    pub lock_distance: f64,
    /// Exclusive |dRow|/|dCol| band treated as a diagonal.
    pub diagonal_band_min: f64,
    pub diagonal_band_max: f64,
    /// How long a rejected selection stays red.
    pub flash_ms: f64,
    /// Share of the canvas the grid may occupy on its limiting axis.
    pub fill_ratio: f64,
    pub min_font_px: f64,
    pub font_scale: f64,
    pub font_family: String,
    pub colors: OverlayColors,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    pub locked: String,
    pub selecting: String,
    pub rejected: String,
    pub letters: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lock_distance: 2.0,
            diagonal_band_min: 0.8,
            diagonal_band_max: 1.25,
            flash_ms: 300.0,
            fill_ratio: 0.9,
            min_font_px: 16.0,
            font_scale: 0.55,
            font_family: "Epoch, sans-serif".to_string(),
            colors: OverlayColors::default(),
        }
    }
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            locked: "rgba(0,180,0,0.35)".to_string(),
            selecting: "rgba(0,0,255,0.25)".to_string(),
            rejected: "rgba(200,0,0,0.35)".to_string(),
            letters: "white".to_string(),
        }
    }
}

impl GameConfig {
    /// Canvas font string for a given cell size.
    pub fn font_for_cell(&self, cell_px: f64) -> String {
        let px = self.min_font_px.max(cell_px * self.font_scale);
        format!("{}px {}", px, self.font_family)
    }
}
