//! Core data models for the word search.
//! The grid and word list are fixed puzzle data; `Session` is the only
//! mutable state and changes solely through `SessionAction`s.

use serde::Deserialize;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

use crate::config::GameConfig;
use crate::state::{Drag, MatchOutcome, evaluate};

pub const GRID_ROWS: u32 = 25;
pub const GRID_COLS: u32 = 25;

const BUNDLED_PUZZLE: &str = include_str!("../assets/puzzle.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the cell `steps` moves along `dir`, or `None` once it leaves the grid.
    pub fn step(self, dir: Direction, steps: u32) -> Option<Cell> {
        let r = self.row as i64 + dir.d_row as i64 * steps as i64;
        let c = self.col as i64 + dir.d_col as i64 * steps as i64;
        if r < 0 || c < 0 || r >= GRID_ROWS as i64 || c >= GRID_COLS as i64 {
            return None;
        }
        Some(Cell::new(r as u32, c as u32))
    }

    pub fn delta_to(self, other: Cell) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }
}

/// One of the eight unit steps a selection may follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 8] = [
        Direction { d_row: -1, d_col: -1 },
        Direction { d_row: -1, d_col: 0 },
        Direction { d_row: -1, d_col: 1 },
        Direction { d_row: 0, d_col: -1 },
        Direction { d_row: 0, d_col: 1 },
        Direction { d_row: 1, d_col: -1 },
        Direction { d_row: 1, d_col: 0 },
        Direction { d_row: 1, d_col: 1 },
    ];

    pub fn new(d_row: i32, d_col: i32) -> Option<Self> {
        let unit = |d: i32| (-1..=1).contains(&d);
        if (d_row == 0 && d_col == 0) || !unit(d_row) || !unit(d_col) {
            return None;
        }
        Some(Self { d_row, d_col })
    }

    pub fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

/// Row-major 25x25 letter matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    letters: Vec<char>,
}

impl Grid {
    pub fn letter(&self, cell: Cell) -> char {
        self.letters[(cell.row * GRID_COLS + cell.col) as usize]
    }

    pub fn read(&self, path: &[Cell]) -> String {
        path.iter().map(|c| self.letter(*c)).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.letters.iter().enumerate().map(|(i, ch)| {
            let i = i as u32;
            (Cell::new(i / GRID_COLS, i % GRID_COLS), *ch)
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("puzzle definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected {expected} grid rows, found {found}")]
    RowCount { expected: u32, found: usize },
    #[error("grid row {row} has {found} letters, expected {expected}")]
    RowWidth { row: usize, expected: u32, found: usize },
    #[error("grid row {row} contains non-uppercase character {ch:?}")]
    BadLetter { row: usize, ch: char },
    #[error("word list entry {0:?} is empty or not uppercase A-Z")]
    BadWord(String),
}

/// On-disk shape of a puzzle file.
#[derive(Clone, Debug, Deserialize)]
struct PuzzleDef {
    rows: Vec<String>,
    words: Vec<String>,
    #[serde(default)]
    config: GameConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: WordSet,
    pub config: GameConfig,
}

impl Puzzle {
    pub fn bundled() -> Result<Self, PuzzleError> {
        Self::from_json(BUNDLED_PUZZLE)
    }

    pub fn from_json(raw: &str) -> Result<Self, PuzzleError> {
        let def: PuzzleDef = serde_json::from_str(raw)?;
        if def.rows.len() != GRID_ROWS as usize {
            return Err(PuzzleError::RowCount {
                expected: GRID_ROWS,
                found: def.rows.len(),
            });
        }
        let mut letters = Vec::with_capacity((GRID_ROWS * GRID_COLS) as usize);
        for (row, line) in def.rows.iter().enumerate() {
            let width = line.chars().count();
            if width != GRID_COLS as usize {
                return Err(PuzzleError::RowWidth {
                    row,
                    expected: GRID_COLS,
                    found: width,
                });
            }
            if let Some(ch) = line.chars().find(|c| !c.is_ascii_uppercase()) {
                return Err(PuzzleError::BadLetter { row, ch });
            }
            letters.extend(line.chars());
        }
        let mut words = HashSet::with_capacity(def.words.len());
        for w in def.words {
            if w.is_empty() || !w.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PuzzleError::BadWord(w));
            }
            words.insert(w);
        }
        Ok(Self {
            grid: Grid { letters },
            words: WordSet { words },
            config: def.config,
        })
    }
}

// ---------------- Session reducer -----------------

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub puzzle: Rc<Puzzle>,
    pub drag: Drag,
    /// In-progress selection; empty when not dragging.
    pub selection: Vec<Cell>,
    /// One entry per confirmed trace, including re-traces of found words.
    pub locked_paths: Vec<Vec<Cell>>,
    /// Found words in discovery order; never holds duplicates.
    pub found_words: Vec<String>,
    pub flash_ttl_ms: f64,
    /// Path shown in the rejected colour while the flash lasts.
    pub flashed_path: Vec<Cell>,
    pub last_outcome: Option<MatchOutcome>,
    /// Bumped on every state change; drives redraw effects.
    pub version: u64,
}

impl Session {
    pub fn new(puzzle: Rc<Puzzle>) -> Self {
        Self {
            puzzle,
            drag: Drag::default(),
            selection: Vec::new(),
            locked_paths: Vec::new(),
            found_words: Vec::new(),
            flash_ttl_ms: 0.0,
            flashed_path: Vec::new(),
            last_outcome: None,
            version: 0,
        }
    }

    pub fn found_count(&self) -> usize {
        self.found_words.len()
    }

    pub fn total_count(&self) -> usize {
        self.puzzle.words.len()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_ttl_ms > 0.0
    }

    pub fn is_complete(&self) -> bool {
        self.total_count() > 0 && self.found_count() == self.total_count()
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    /// Pointer pressed; `cell` is `None` when it landed outside the grid.
    PointerDown { cell: Option<Cell> },
    PointerMove { cell: Option<Cell> },
    PointerUp,
    /// Gesture aborted by the browser; drops the selection without matching.
    PointerCancel,
    /// Frame tick; advances the rejection flash.
    Tick { dt_ms: f64 },
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            PointerDown { cell } => {
                new.drag = Drag::begin(cell);
                new.selection = cell.into_iter().collect();
                new.last_outcome = None;
                // a new press ends any rejection still on screen
                new.flash_ttl_ms = 0.0;
                new.flashed_path.clear();
            }
            PointerMove { cell } => {
                let Some(cell) = cell else { return self };
                if !new.drag.active {
                    return self;
                }
                let cfg = &self.puzzle.config;
                let Some(path) = new.drag.path_to(cell, cfg) else { return self };
                if path == self.selection && new.drag == self.drag {
                    return self;
                }
                new.selection = path;
            }
            PointerUp => {
                if !new.drag.active {
                    return self;
                }
                let outcome = evaluate(
                    &self.puzzle.grid,
                    &self.puzzle.words,
                    &self.found_words,
                    &self.selection,
                );
                match &outcome {
                    MatchOutcome::Found(word) => {
                        new.found_words.push(word.clone());
                        new.locked_paths.push(self.selection.clone());
                    }
                    MatchOutcome::Retraced(_) => {
                        new.locked_paths.push(self.selection.clone());
                    }
                    MatchOutcome::Rejected(_) => {
                        new.flash_ttl_ms = self.puzzle.config.flash_ms;
                        new.flashed_path = self.selection.clone();
                    }
                    MatchOutcome::Empty => {}
                }
                new.last_outcome = Some(outcome);
                new.selection.clear();
                new.drag = Drag::default();
            }
            PointerCancel => {
                if !new.drag.active {
                    return self;
                }
                new.selection.clear();
                new.drag = Drag::default();
            }
            Tick { dt_ms } => {
                if !new.is_flashing() || dt_ms <= 0.0 {
                    return self;
                }
                new.flash_ttl_ms -= dt_ms;
                if new.flash_ttl_ms <= 0.0 {
                    new.flash_ttl_ms = 0.0;
                    new.flashed_path.clear();
                }
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
