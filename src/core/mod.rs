//! Core domain types for the game
//!
//! Pure, I/O-free types: words, feedback classes, scoring and the board.

mod cell;
mod grid;
mod score;
mod word;

pub use cell::CellState;
pub use grid::{Grid, ROWS, Row};
pub use score::{Score, is_solved, score, to_emoji};
pub use word::{WORD_LEN, Word, WordError};
