//! The word catalog
//!
//! Holds the acceptable-guess set and the target-eligible list. Built once at
//! startup and only read afterwards, so a shared `&WordCatalog` is safe to use
//! from any number of concurrent requests.

use super::loader::{load_or_empty, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Variable name looked up in the acceptable-words source
pub const ALL_WORDS_VAR: &str = "all_words";

/// Variable name looked up in the target-words source
pub const TARGET_WORDS_VAR: &str = "target_words";

/// Membership queries the game needs from a word source
pub trait Dictionary {
    /// True if `word` may be used as a guess or a chosen target
    fn contains(&self, word: &Word) -> bool;

    /// True iff `text` normalizes to a five-letter word in the dictionary
    fn is_acceptable_guess(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Draw a target word, `None` if there is nothing to draw from
    fn random_target<R: Rng + ?Sized>(&self, _rng: &mut R) -> Option<&Word> {
        None
    }
}

/// Read-only catalog of acceptable guesses and target words
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    all_words: FxHashSet<Word>,
    target_words: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog from already-normalized words
    pub fn new(
        all_words: impl IntoIterator<Item = Word>,
        target_words: impl IntoIterator<Item = Word>,
    ) -> Self {
        Self {
            all_words: all_words.into_iter().collect(),
            target_words: target_words.into_iter().collect(),
        }
    }

    /// Build a catalog from raw strings, skipping entries that are not words
    ///
    /// # Examples
    /// ```
    /// use wordish::wordlists::{Dictionary, WordCatalog};
    ///
    /// let catalog = WordCatalog::from_words(&["delve", "crane"], &["delve"]);
    /// assert!(catalog.is_acceptable_guess(" Crane "));
    /// assert!(!catalog.is_acceptable_guess("slate"));
    /// ```
    #[must_use]
    pub fn from_words(all_words: &[&str], target_words: &[&str]) -> Self {
        Self::new(words_from_slice(all_words), words_from_slice(target_words))
    }

    /// Load both lists from disk
    ///
    /// A missing or unreadable file yields an empty list for that source; the
    /// failure is logged rather than returned.
    pub fn load(all_words_path: impl AsRef<Path>, target_words_path: impl AsRef<Path>) -> Self {
        let all_words_path = all_words_path.as_ref();
        let target_words_path = target_words_path.as_ref();

        let catalog = Self::new(
            load_or_empty(all_words_path, ALL_WORDS_VAR),
            load_or_empty(target_words_path, TARGET_WORDS_VAR),
        );

        log::info!(
            "loaded {} acceptable words from {}, {} target words from {}",
            catalog.len(),
            all_words_path.display(),
            catalog.target_count(),
            target_words_path.display()
        );
        if catalog.is_empty() {
            log::warn!("word catalog is empty; every guess will be rejected");
        }

        catalog
    }

    /// True if `word` is one of the target-eligible words
    #[must_use]
    pub fn is_target_word(&self, word: &Word) -> bool {
        self.target_words.contains(word)
    }

    #[must_use]
    pub fn target_words(&self) -> &[Word] {
        &self.target_words
    }

    /// Number of acceptable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Number of target words
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.target_words.len()
    }
}

impl Dictionary for WordCatalog {
    fn contains(&self, word: &Word) -> bool {
        self.all_words.contains(word)
    }

    /// Uniform draw from the target list
    fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.target_words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn acceptable_guess_normalizes() {
        let catalog = WordCatalog::from_words(&["delve", "CRANE"], &[]);
        assert!(catalog.is_acceptable_guess("DELVE"));
        assert!(catalog.is_acceptable_guess("  delve\t"));
        assert!(catalog.is_acceptable_guess("crane"));
    }

    #[test]
    fn acceptable_guess_rejects_non_words() {
        let catalog = WordCatalog::from_words(&["delve"], &[]);
        assert!(!catalog.is_acceptable_guess("slate"));
        assert!(!catalog.is_acceptable_guess("delv"));
        assert!(!catalog.is_acceptable_guess("delves"));
        assert!(!catalog.is_acceptable_guess("de1ve"));
        assert!(!catalog.is_acceptable_guess(""));
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let catalog = WordCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.is_acceptable_guess("delve"));
        assert!(catalog.random_target(&mut StdRng::seed_from_u64(7)).is_none());
    }

    #[test]
    fn sizes_ignore_invalid_entries() {
        let catalog = WordCatalog::from_words(&["delve", "crane", "oops"], &["delve", "x"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.target_count(), 1);
    }

    #[test]
    fn random_target_comes_from_target_list() {
        let catalog = WordCatalog::from_words(&["delve", "crane", "slate"], &["delve", "slate"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let target = catalog.random_target(&mut rng).unwrap();
            assert!(catalog.is_target_word(target));
        }
    }

    #[test]
    fn load_missing_files_degrades_to_empty() {
        let dir = std::env::temp_dir();
        let catalog = WordCatalog::load(
            dir.join("wordish-missing-all.txt"),
            dir.join("wordish-missing-targets.txt"),
        );
        assert!(catalog.is_empty());
        assert_eq!(catalog.target_count(), 0);
    }
}
