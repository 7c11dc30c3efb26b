//! Formatting utilities for terminal output

use crate::core::{CellState, Grid, Row, to_emoji};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard layout used for the letter summary
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Paint one cell as a coloured tile
#[must_use]
pub fn tile(letter: Option<char>, state: CellState) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or(' '));
    match state {
        CellState::Empty => text.on_black().white(),
        CellState::Absent => text.on_bright_black().white().bold(),
        CellState::Present => text.on_yellow().black().bold(),
        CellState::Correct => text.on_green().black().bold(),
    }
}

/// Paint a whole row as coloured tiles
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.classes()
        .iter()
        .enumerate()
        .map(|(i, &state)| tile(row.letter_at(i), state).to_string())
        .collect()
}

/// Emoji summary of every guessed row, one line per guess
#[must_use]
pub fn grid_to_emoji(grid: &Grid) -> String {
    grid.guesses()
        .map(|row| to_emoji(row.classes()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Best feedback seen so far for every guessed letter
///
/// Correct beats present beats absent.
#[must_use]
pub fn keyboard_states(grid: &Grid) -> FxHashMap<char, CellState> {
    let mut states: FxHashMap<char, CellState> = FxHashMap::default();
    for row in grid.guesses() {
        for (i, &state) in row.classes().iter().enumerate() {
            let Some(letter) = row.letter_at(i) else {
                continue;
            };
            let best = states.entry(letter).or_insert(state);
            if rank(state) > rank(*best) {
                *best = state;
            }
        }
    }
    states
}

const fn rank(state: CellState) -> u8 {
    match state {
        CellState::Empty => 0,
        CellState::Absent => 1,
        CellState::Present => 2,
        CellState::Correct => 3,
    }
}
