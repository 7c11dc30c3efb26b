//! Structural integrity gate for continuation requests
//!
//! These checks are strict and run in a fixed order. They decide whether the
//! hidden fields are trustworthy enough to continue a game; they never repair
//! anything.

use super::error::{GridDefect, StructuralError};
use super::fields::HiddenFields;
use crate::core::{ROWS, WORD_LEN, Word};
use serde_json::Value;

/// Hidden fields that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFields {
    pub target: Word,
    pub row_index: usize,
    pub game_over: bool,
}

/// Run every structural check in order
///
/// # Errors
/// Returns the first `StructuralError` encountered: row index, then grid
/// shape, then target, then game-over flag.
pub fn check_hidden_fields(hidden: &HiddenFields) -> Result<CheckedFields, StructuralError> {
    let row_index = parse_row_index(hidden.row_index.as_deref())?;
    check_grid_shape(hidden.grid_json.as_deref()).map_err(StructuralError::Grid)?;
    let target = parse_target(hidden.target.as_deref())?;
    let game_over = parse_game_over(hidden.game_over.as_deref())?;

    Ok(CheckedFields {
        target,
        row_index,
        game_over,
    })
}

/// A decimal literal in `0..ROWS`, digits only
///
/// # Errors
/// Returns `StructuralError::RowIndex` for anything else.
pub fn parse_row_index(raw: Option<&str>) -> Result<usize, StructuralError> {
    let err = || StructuralError::RowIndex(raw.map(str::to_string));

    let digits = raw.filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));
    let index = digits
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(err)?;

    if index < ROWS { Ok(index) } else { Err(err()) }
}

/// Exactly six objects, each with string `letters` and five `classes`
///
/// A row without `letters` is accepted as blank.
///
/// # Errors
/// Returns the first `GridDefect` found.
pub fn check_grid_shape(raw: Option<&str>) -> Result<(), GridDefect> {
    let raw = raw.ok_or(GridDefect::Missing)?;
    let value: Value = serde_json::from_str(raw).map_err(|_| GridDefect::NotJson)?;
    let rows = value.as_array().ok_or(GridDefect::NotList)?;

    if rows.len() != ROWS {
        return Err(GridDefect::RowCount(rows.len()));
    }

    for (i, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or(GridDefect::RowNotObject(i))?;

        if let Some(letters) = object.get("letters")
            && !letters.is_string()
        {
            return Err(GridDefect::LettersNotString(i));
        }

        match object.get("classes").and_then(Value::as_array) {
            Some(classes) if classes.len() == WORD_LEN => {}
            _ => return Err(GridDefect::BadClasses(i)),
        }
    }

    Ok(())
}

/// Five letters after trimming; no dictionary check
///
/// # Errors
/// Returns `StructuralError::Target` if the echoed target is not a word.
pub fn parse_target(raw: Option<&str>) -> Result<Word, StructuralError> {
    raw.and_then(|s| Word::new(s).ok())
        .ok_or_else(|| StructuralError::Target(raw.map(str::to_string)))
}

/// Exactly `"0"` or `"1"`
///
/// # Errors
/// Returns `StructuralError::GameOver` for any other value.
pub fn parse_game_over(raw: Option<&str>) -> Result<bool, StructuralError> {
    match raw {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        _ => Err(StructuralError::GameOver(raw.map(str::to_string))),
    }
}
