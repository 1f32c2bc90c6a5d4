use crate::model::{Cell, Grid, WordSet};

/// Result of releasing a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nothing was selected.
    Empty,
    /// A target word found for the first time.
    Found(String),
    /// A target word that was already found; re-highlighted only.
    Retraced(String),
    /// Letters that are not a target word.
    Rejected(String),
}

/// Reads `path` off the grid in drag order and checks it against the word list.
pub fn evaluate(grid: &Grid, words: &WordSet, found: &[String], path: &[Cell]) -> MatchOutcome {
    if path.is_empty() {
        return MatchOutcome::Empty;
    }
    let word = grid.read(path);
    if !words.contains(&word) {
        MatchOutcome::Rejected(word)
    } else if found.iter().any(|w| *w == word) {
        MatchOutcome::Retraced(word)
    } else {
        MatchOutcome::Found(word)
    }
}
