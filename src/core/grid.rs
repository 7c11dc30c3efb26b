//! The guess board
//!
//! A [`Grid`] is always exactly [`ROWS`] rows of [`WORD_LEN`] cells. Rows are
//! normalized on construction so the shape invariant cannot be broken.

use super::{CellState, Score, WORD_LEN, Word};
use serde::Serialize;

/// Number of guesses allowed per game
pub const ROWS: usize = 6;

/// One guess attempt: its letters and per-letter feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    letters: String,
    classes: [CellState; WORD_LEN],
}

impl Row {
    /// A row with no letters and all cells empty
    #[must_use]
    pub fn empty() -> Self {
        Self {
            letters: " ".repeat(WORD_LEN),
            classes: [CellState::Empty; WORD_LEN],
        }
    }

    /// Build a row from loose parts
    ///
    /// Letters are uppercased, then truncated or space-padded to five
    /// characters; classes are truncated or padded with `Empty`.
    #[must_use]
    pub fn from_parts(letters: &str, classes: &[CellState]) -> Self {
        let mut normalized: String = letters.to_uppercase().chars().take(WORD_LEN).collect();
        let len = normalized.chars().count();
        normalized.extend(std::iter::repeat_n(' ', WORD_LEN - len));

        let mut padded = [CellState::Empty; WORD_LEN];
        for (slot, &class) in padded.iter_mut().zip(classes) {
            *slot = class;
        }

        Self {
            letters: normalized,
            classes: padded,
        }
    }

    /// A scored guess
    #[must_use]
    pub fn scored(guess: &Word, classes: Score) -> Self {
        Self {
            letters: guess.text().to_string(),
            classes,
        }
    }

    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub const fn classes(&self) -> &[CellState; WORD_LEN] {
        &self.classes
    }

    /// True if no guess has been recorded in this row
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.trim().is_empty()
    }

    /// Letter at `position`, `None` for a blank cell
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.chars().nth(position).filter(|c| *c != ' ')
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::empty()
    }
}

/// The full board, earliest guess first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [Row; ROWS],
}

impl Grid {
    /// A fresh board: six empty rows
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rows: std::array::from_fn(|_| Row::empty()),
        }
    }

    /// Build a grid from any number of rows, padding or truncating to six
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut grid = Self::empty();
        for (slot, row) in grid.rows.iter_mut().zip(rows) {
            *slot = row;
        }
        grid
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Row at `index`, `None` if out of range
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Overwrite the row at `index`; out-of-range indices are ignored
    pub fn set_row(&mut self, index: usize, row: Row) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row;
        }
    }

    /// Iterate over rows that hold a guess
    pub fn guesses(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_empty())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn empty_grid_shape() {
        let grid = Grid::empty();
        assert_eq!(grid.rows().len(), ROWS);
        for row in grid.rows() {
            assert_eq!(row.letters(), "     ");
            assert_eq!(row.classes(), &[CellState::Empty; WORD_LEN]);
            assert!(row.is_empty());
        }
        assert_eq!(grid.guesses().count(), 0);
    }

    #[test]
    fn row_from_parts_pads_short_input() {
        let row = Row::from_parts("ab", &[CellState::Correct]);
        assert_eq!(row.letters(), "AB   ");
        assert_eq!(
            row.classes(),
            &[
                CellState::Correct,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty
            ]
        );
    }

    #[test]
    fn row_from_parts_truncates_long_input() {
        let row = Row::from_parts("abcdefgh", &[CellState::Absent; 7]);
        assert_eq!(row.letters(), "ABCDE");
        assert_eq!(row.classes(), &[CellState::Absent; WORD_LEN]);
    }

    #[test]
    fn row_letter_at() {
        let row = Row::from_parts("ab", &[]);
        assert_eq!(row.letter_at(0), Some('A'));
        assert_eq!(row.letter_at(1), Some('B'));
        assert_eq!(row.letter_at(2), None);
        assert_eq!(row.letter_at(9), None);
    }

    #[test]
    fn grid_from_rows_pads_and_truncates() {
        let short = Grid::from_rows([Row::from_parts("crane", &[])]);
        assert_eq!(short.rows()[0].letters(), "CRANE");
        assert!(short.rows()[1..].iter().all(Row::is_empty));

        let long = Grid::from_rows((0..9).map(|_| Row::from_parts("slate", &[])));
        assert_eq!(long.rows().len(), ROWS);
        assert_eq!(long.guesses().count(), ROWS);
    }

    #[test]
    fn set_row_records_scored_guess() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let mut grid = Grid::empty();
        grid.set_row(2, Row::scored(&guess, score(&guess, &target)));
        grid.set_row(ROWS, Row::scored(&guess, score(&guess, &target)));

        assert_eq!(grid.row(2).unwrap().letters(), "CRANE");
        assert_eq!(grid.guesses().count(), 1);
    }
}
