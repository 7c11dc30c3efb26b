//! Normalized five-letter words
//!
//! Every word entering the game (targets, guesses, catalog entries) passes
//! through [`Word::new`], which trims surrounding whitespace and uppercases.

use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LEN: usize = 5;

/// A trimmed, uppercased word of exactly five ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for text that does not normalize to a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Normalize `text` into a Word
    ///
    /// Surrounding whitespace is trimmed and the result uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if, after trimming:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordish::core::Word;
    ///
    /// let word = Word::new(" delve ").unwrap();
    /// assert_eq!(word.text(), "DELVE");
    ///
    /// assert!(Word::new("test").is_err());
    /// assert!(Word::new("we<3u").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();

        let len = trimmed.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    ///
    /// # Panics
    /// Will not panic - construction guarantees exactly five ASCII bytes.
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> [u8; WORD_LEN] {
        self.text
            .as_bytes()
            .try_into()
            .expect("length already validated")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
