//! Error taxonomy of the state machine
//!
//! Nothing here escapes to the caller as a fault. Structural errors reset the
//! player to the start screen; domain errors become inline status messages.

use std::fmt;

/// Message shown on the start screen after any structural error
pub const MALFORMED_FIELDS: &str =
    "error: invalid input. Hidden fields were malformed; please start a new game.";

/// What was wrong with the serialized grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridDefect {
    Missing,
    NotJson,
    NotList,
    RowCount(usize),
    RowNotObject(usize),
    LettersNotString(usize),
    BadClasses(usize),
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "grid is missing"),
            Self::NotJson => write!(f, "grid is not valid JSON"),
            Self::NotList => write!(f, "grid is not a list"),
            Self::RowCount(n) => write!(f, "grid has {n} rows, expected 6"),
            Self::RowNotObject(i) => write!(f, "row {i} is not an object"),
            Self::LettersNotString(i) => write!(f, "row {i} letters is not a string"),
            Self::BadClasses(i) => write!(f, "row {i} classes is not a list of 5"),
        }
    }
}

/// Corrupted hidden fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    RowIndex(Option<String>),
    Grid(GridDefect),
    Target(Option<String>),
    GameOver(Option<String>),
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowIndex(raw) => write!(f, "malformed row_index: {raw:?}"),
            Self::Grid(defect) => write!(f, "malformed grid_json: {defect}"),
            Self::Target(raw) => write!(f, "malformed target: {raw:?}"),
            Self::GameOver(raw) => write!(f, "malformed game_over: {raw:?}"),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Bad target or guess content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    TargetNotFiveLetters,
    TargetNotAWord,
    NoTargetWords,
    GuessNotFiveLetters,
    GuessNotAWord,
}

impl DomainError {
    /// User-facing text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TargetNotFiveLetters => {
                "invalid input: target must be exactly five English letters."
            }
            Self::TargetNotAWord => "invalid input: not a valid English word.",
            Self::NoTargetWords => "invalid input: no target words are available.",
            Self::GuessNotFiveLetters => "error: invalid input. enter exactly five English letters.",
            Self::GuessNotAWord => "error: invalid input. not a valid English word.",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DomainError {}
