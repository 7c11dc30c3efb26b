//! Per-request game state

use super::codec;
use super::fields::HiddenFields;
use crate::core::{Grid, ROWS, Row, Word, is_solved, score};

/// Everything needed to continue a game, rebuilt on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub target: Word,
    pub grid: Grid,
    pub row_index: usize,
    pub game_over: bool,
}

/// Display-level state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Won,
    Lost,
}

/// Result of recording a valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Won,
    Lost,
    Continue,
}

impl GameSnapshot {
    /// A fresh game for `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: Grid::empty(),
            row_index: 0,
            game_over: false,
        }
    }

    /// Score `guess`, write it into the current row and advance
    ///
    /// The row index only moves when the game continues.
    pub fn apply_guess(&mut self, guess: &Word) -> GuessOutcome {
        let classes = score(guess, &self.target);
        self.grid.set_row(self.row_index, Row::scored(guess, classes));

        if *guess == self.target {
            self.game_over = true;
            GuessOutcome::Won
        } else if self.row_index + 1 >= ROWS {
            self.game_over = true;
            GuessOutcome::Lost
        } else {
            self.row_index += 1;
            GuessOutcome::Continue
        }
    }

    /// Derive won/lost from the last played row
    ///
    /// A finished game ends on `row_index`: the winning row, or the final row
    /// of a loss. Only meaningful for display; the transport carries just
    /// `game_over`.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.game_over {
            GamePhase::InProgress
        } else if self
            .grid
            .row(self.row_index)
            .is_some_and(|row| is_solved(row.classes()))
        {
            GamePhase::Won
        } else {
            GamePhase::Lost
        }
    }

    /// Number of guesses recorded on the board
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.grid.guesses().count()
    }

    /// Serialize into the hidden fields for the next request
    #[must_use]
    pub fn hidden_fields(&self) -> HiddenFields {
        HiddenFields {
            target: Some(self.target.text().to_string()),
            grid_json: Some(codec::encode(&self.grid)),
            row_index: Some(self.row_index.to_string()),
            game_over: Some(if self.game_over { "1" } else { "0" }.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    fn snapshot(target: &str) -> GameSnapshot {
        GameSnapshot::new(Word::new(target).unwrap())
    }

    fn guess(word: &str) -> Word {
        Word::new(word).unwrap()
    }

    #[test]
    fn new_snapshot_is_fresh() {
        let game = snapshot("delve");
        assert_eq!(game.row_index, 0);
        assert!(!game.game_over);
        assert_eq!(game.grid, Grid::empty());
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn wrong_guess_advances() {
        let mut game = snapshot("delve");
        assert_eq!(game.apply_guess(&guess("crane")), GuessOutcome::Continue);
        assert_eq!(game.row_index, 1);
        assert!(!game.game_over);
        assert_eq!(game.grid.rows()[0].letters(), "CRANE");
        assert_eq!(game.guesses_used(), 1);
    }

    #[test]
    fn correct_guess_wins_without_advancing() {
        let mut game = snapshot("delve");
        game.apply_guess(&guess("crane"));
        assert_eq!(game.apply_guess(&guess("delve")), GuessOutcome::Won);
        assert_eq!(game.row_index, 1);
        assert!(game.game_over);
        assert_eq!(game.grid.rows()[1].classes(), &[CellState::Correct; 5]);
        assert_eq!(game.phase(), GamePhase::Won);
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut game = snapshot("delve");
        for _ in 0..5 {
            assert_eq!(game.apply_guess(&guess("crane")), GuessOutcome::Continue);
        }
        assert_eq!(game.row_index, 5);
        assert_eq!(game.apply_guess(&guess("slate")), GuessOutcome::Lost);
        assert_eq!(game.row_index, 5);
        assert!(game.game_over);
        assert_eq!(game.phase(), GamePhase::Lost);
        assert_eq!(game.guesses_used(), 6);
    }

    #[test]
    fn phase_follows_the_final_row_not_earlier_ones() {
        let mut game = snapshot("delve");
        // A client-supplied board with a solved first row
        game.grid
            .set_row(0, Row::scored(&guess("delve"), [CellState::Correct; 5]));
        game.row_index = 1;
        for _ in 0..4 {
            game.apply_guess(&guess("crane"));
        }
        assert_eq!(game.row_index, 5);
        assert_eq!(game.apply_guess(&guess("slate")), GuessOutcome::Lost);
        assert_eq!(game.phase(), GamePhase::Lost);
    }

    #[test]
    fn hidden_fields_round_trip_through_codec() {
        let mut game = snapshot("delve");
        game.apply_guess(&guess("level"));
        let hidden = game.hidden_fields();

        assert_eq!(hidden.target.as_deref(), Some("DELVE"));
        assert_eq!(hidden.row_index.as_deref(), Some("1"));
        assert_eq!(hidden.game_over.as_deref(), Some("0"));
        assert_eq!(codec::decode(hidden.grid_json.as_deref()), game.grid);
    }
}
