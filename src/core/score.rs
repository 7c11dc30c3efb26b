//! Guess scoring
//!
//! Compares a guess to the target and classifies every letter, following
//! Wordle's duplicate-letter rules: a repeated guessed letter is marked
//! present at most as many times as it occurs unmatched in the target.

use super::{CellState, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Feedback for a whole guess
pub type Score = [CellState; WORD_LEN];

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches correct; count every unmatched target letter
/// 2. Second pass: mark a non-correct letter present while its remaining count
///    is positive, consuming one; otherwise absent
///
/// # Examples
/// ```
/// use wordish::core::{CellState, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
///
/// let result = score(&guess, &target);
/// assert_eq!(result[2], CellState::Correct);
/// assert_eq!(result[0], CellState::Absent);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Score {
    let guess = guess.bytes();
    let target = target.bytes();

    let mut result = [CellState::Absent; WORD_LEN];
    let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

    // Index needed to compare guess[i] with target[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess[i] == target[i] {
            result[i] = CellState::Correct;
        } else {
            *remaining.entry(target[i]).or_insert(0) += 1;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if result[i] == CellState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess[i])
            && *count > 0
        {
            result[i] = CellState::Present;
            *count -= 1;
        }
    }

    result
}

/// True when every cell is correct
#[must_use]
pub fn is_solved(classes: &[CellState]) -> bool {
    classes.len() == WORD_LEN && classes.iter().all(|&c| c == CellState::Correct)
}

/// Render feedback as an emoji line, e.g. "🟩🟨⬜⬜🟩"
#[must_use]
pub fn to_emoji(classes: &[CellState]) -> String {
    classes.iter().map(|c| c.to_emoji()).collect()
}
