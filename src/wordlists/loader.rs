//! Word list loading utilities
//!
//! A word list source is free-form text in one of three shapes, tried in order:
//! 1. A `name = [ ... ]` literal-list assignment for the list's variable name
//! 2. A bare `[ ... ]` literal list
//! 3. Raw text, from which every standalone run of five letters is taken
//!
//! Literal lists hold single- or double-quoted strings and may carry `#`
//! comments; unquoted numbers and constants in them are skipped. Entries that
//! do not normalize to a [`Word`] are discarded.
//!
//! Raw text only yields runs that are exactly five letters long. A longer
//! run such as `abcdefgh` is skipped as a whole rather than cut into a
//! five-letter prefix.

use crate::core::{WORD_LEN, Word};
use regex::Regex;
use std::fmt;
use std::fs;
use std::io;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::CharIndices;
use std::sync::OnceLock;

/// Failure to read a word list source
#[derive(Debug)]
pub enum CatalogLoadError {
    Missing(PathBuf),
    Io(PathBuf, io::Error),
}

impl fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "word list file missing: {}", path.display()),
            Self::Io(path, err) => write!(f, "failed reading {}: {err}", path.display()),
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Io(_, err) => Some(err),
        }
    }
}

fn letter_run() -> &'static Regex {
    static LETTER_RUN: OnceLock<Regex> = OnceLock::new();
    LETTER_RUN.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("static regex"))
}

/// Load words from a file
///
/// # Errors
///
/// Returns `CatalogLoadError::Missing` if the file does not exist and
/// `CatalogLoadError::Io` if it cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use wordish::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/all_words.txt", "all_words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, var_name: &str) -> Result<Vec<Word>, CatalogLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogLoadError::Missing(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| CatalogLoadError::Io(path.to_path_buf(), e))?;
    Ok(parse_words(&content, var_name))
}

/// Load words from a file, degrading to an empty list on failure
///
/// Failures are logged at `warn`; an empty list makes every later guess
/// fail validation instead of aborting startup.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P, var_name: &str) -> Vec<Word> {
    match load_from_file(path, var_name) {
        Ok(words) => words,
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

/// Extract words from word list text
///
/// # Examples
/// ```
/// use wordish::wordlists::loader::parse_words;
///
/// let words = parse_words("all_words = ['delve', \"crane\", 'toolong']", "all_words");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["DELVE", "CRANE"]);
/// ```
#[must_use]
pub fn parse_words(text: &str, var_name: &str) -> Vec<Word> {
    if let Some(items) = find_assignment(text, var_name) {
        return words_from_items(&items);
    }

    if let Some(items) = parse_literal_list(text.trim()) {
        return words_from_items(&items);
    }

    letter_run()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.len() == WORD_LEN)
        .filter_map(|run| Word::new(run).ok())
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordish::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn words_from_items(items: &[String]) -> Vec<Word> {
    items.iter().filter_map(|item| Word::new(item).ok()).collect()
}

/// Locate `var_name = [ ... ]` and parse the list that follows
fn find_assignment(text: &str, var_name: &str) -> Option<Vec<String>> {
    let pattern = format!(r"\b{}\s*=\s*\[", regex::escape(var_name));
    let assignment = Regex::new(&pattern).ok()?;
    let open = assignment.find(text)?.end() - 1;
    parse_list_prefix(&text[open..]).map(|(items, _)| items)
}

/// Parse `[ 'a', "b", ... ]` into its string items
///
/// Returns `None` unless the whole input is one well-formed list.
fn parse_literal_list(text: &str) -> Option<Vec<String>> {
    let (items, rest) = parse_list_prefix(text)?;
    rest.trim().is_empty().then_some(items)
}

type Cursor<'t> = Peekable<CharIndices<'t>>;

/// Parse a list at the start of `text`, returning its string items and the
/// text after the closing bracket
///
/// Items are single- or double-quoted strings. Numbers, `True`, `False` and
/// `None` are accepted and dropped. `#` comments run to the end of the line.
/// A trailing comma is allowed. Any other token rejects the whole list.
fn parse_list_prefix(text: &str) -> Option<(Vec<String>, &str)> {
    let body = text.strip_prefix('[')?;
    let mut chars = body.char_indices().peekable();
    let mut items = Vec::new();

    loop {
        skip_blanks(&mut chars);
        match chars.next()? {
            (close, ']') => return Some((items, &body[close + 1..])),
            (_, quote @ ('\'' | '"')) => items.push(quoted(&mut chars, quote)?),
            (_, first) => scalar(&mut chars, first)?,
        }

        skip_blanks(&mut chars);
        match chars.next()? {
            (_, ',') => {}
            (close, ']') => return Some((items, &body[close + 1..])),
            _ => return None,
        }
    }
}

/// Skip whitespace and `#` comments
fn skip_blanks(chars: &mut Cursor<'_>) {
    loop {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        if chars.next_if(|&(_, c)| c == '#').is_none() {
            return;
        }
        while chars.next_if(|&(_, c)| c != '\n').is_some() {}
    }
}

/// Rest of a quoted string whose opening quote was consumed
fn quoted(chars: &mut Cursor<'_>, quote: char) -> Option<String> {
    let mut item = String::new();
    loop {
        match chars.next()?.1 {
            '\\' => item.push(chars.next()?.1),
            c if c == quote => return Some(item),
            c => item.push(c),
        }
    }
}

/// Consume an unquoted item, `None` unless it is a literal scalar
fn scalar(chars: &mut Cursor<'_>, first: char) -> Option<()> {
    let mut token = String::from(first);
    while let Some((_, c)) =
        chars.next_if(|&(_, c)| !c.is_whitespace() && !matches!(c, ',' | ']' | '#'))
    {
        token.push(c);
    }

    let unsigned = token.trim_start_matches(['-', '+']);
    let numeric = unsigned
        .trim_start_matches('.')
        .starts_with(|c: char| c.is_ascii_digit());
    (numeric || matches!(token.as_str(), "True" | "False" | "None")).then_some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn parses_named_assignment() {
        let text = "# generated\nall_words = [\n  'delve',\n  \"Crane\",\n  'abc',\n]\nother = ['zzzzz']\n";
        assert_eq!(texts(&parse_words(text, "all_words")), ["DELVE", "CRANE"]);
    }

    #[test]
    fn named_assignment_selects_the_right_variable() {
        let text = "target_words = ['delve']\nall_words = ['crane', 'slate']";
        assert_eq!(texts(&parse_words(text, "all_words")), ["CRANE", "SLATE"]);
        assert_eq!(texts(&parse_words(text, "target_words")), ["DELVE"]);
    }

    #[test]
    fn parses_bare_list() {
        let text = "  [\"delve\", 'slate', 'we<3u']  ";
        assert_eq!(texts(&parse_words(text, "all_words")), ["DELVE", "SLATE"]);
    }

    #[test]
    fn falls_back_to_letter_runs() {
        let text = "delve\ncrane\nabcdefgh ab-cd slate,teeth\n";
        assert_eq!(
            texts(&parse_words(text, "all_words")),
            ["DELVE", "CRANE", "SLATE", "TEETH"]
        );
    }

    #[test]
    fn malformed_list_falls_through_to_letter_runs() {
        // The variable name itself contributes a five-letter run
        let text = "all_words = [delve, 'crane']";
        assert_eq!(
            texts(&parse_words(text, "all_words")),
            ["WORDS", "DELVE", "CRANE"]
        );
    }

    #[test]
    fn named_assignment_allows_comments() {
        let text = "target_words = [\n 'delve', # common\n 'crane',  # also common\n]";
        assert_eq!(texts(&parse_words(text, "target_words")), ["DELVE", "CRANE"]);
    }

    #[test]
    fn comment_may_contain_a_bracket() {
        let text = "all_words = [\n # five letters only [a-z]\n 'delve',\n]";
        assert_eq!(texts(&parse_words(text, "all_words")), ["DELVE"]);
    }

    #[test]
    fn non_string_items_are_dropped_one_by_one() {
        let text = "all_words = ['delve', 12345, None, -1.5, 'crane']";
        assert_eq!(texts(&parse_words(text, "all_words")), ["DELVE", "CRANE"]);
        assert_eq!(texts(&parse_words("[12345, 'slate']", "all_words")), ["SLATE"]);
    }

    #[test]
    fn assignment_name_must_match_whole_identifier() {
        let text = "extra_all_words = ['crane']\nall_words = ['delve']";
        assert_eq!(texts(&parse_words(text, "all_words")), ["DELVE"]);
    }

    #[test]
    fn literal_list_parser() {
        assert_eq!(
            parse_literal_list("['a', \"b\",]"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(parse_literal_list("[]"), Some(vec![]));
        assert_eq!(parse_literal_list("['a' 'b']"), None);
        assert_eq!(parse_literal_list("['unterminated]"), None);
        assert_eq!(parse_literal_list("'a', 'b'"), None);
        assert_eq!(parse_literal_list("['a'] trailing"), None);
        assert_eq!(parse_literal_list("[delve]"), None);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(texts(&words), ["CRANE", "SLATE"]);
    }

    #[test]
    fn missing_file_is_an_error_and_degrades_to_empty() {
        let path = std::env::temp_dir().join("wordish-definitely-missing-list.txt");
        assert!(matches!(
            load_from_file(&path, "all_words"),
            Err(CatalogLoadError::Missing(_))
        ));
        assert!(load_or_empty(&path, "all_words").is_empty());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "wordish-loader-test-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "target_words = ['delve', 'crane']\n").unwrap();
        let words = load_from_file(&path, "target_words").unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), ["DELVE", "CRANE"]);
    }
}
