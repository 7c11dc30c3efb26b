//! Grid transport codec
//!
//! `encode` writes the grid as a JSON array of six
//! `{"letters": "...", "classes": [...]}` objects. `decode` never fails:
//! anything it cannot make sense of becomes a fresh empty grid. It is only a
//! display fallback; whether a continuation request is acceptable is decided
//! by the strict checks in [`super::validate`] before it is ever called.

use crate::core::{CellState, Grid, Row};
use serde_json::Value;

/// Serialize a grid for the `grid_json` field
///
/// # Panics
/// Will not panic - a grid holds only strings and unit enum variants.
///
/// # Examples
/// ```
/// use wordish::core::Grid;
/// use wordish::game::codec::{decode, encode};
///
/// let grid = Grid::empty();
/// assert_eq!(decode(Some(&encode(&grid))), grid);
/// ```
#[must_use]
pub fn encode(grid: &Grid) -> String {
    serde_json::to_string(grid).expect("grid serialization is infallible")
}

/// Deserialize a `grid_json` field, falling back to an empty grid
#[must_use]
pub fn decode(raw: Option<&str>) -> Grid {
    raw.filter(|s| !s.is_empty())
        .and_then(try_decode)
        .unwrap_or_else(Grid::empty)
}

fn try_decode(raw: &str) -> Option<Grid> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw).ok()? else {
        return None;
    };

    let rows = items
        .iter()
        .map(decode_row)
        .collect::<Option<Vec<Row>>>()?;

    Some(Grid::from_rows(rows))
}

fn decode_row(item: &Value) -> Option<Row> {
    let object = item.as_object()?;

    let letters = match object.get("letters") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return None,
    };

    let classes: Vec<CellState> = match object.get("classes") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(tags)) => tags
            .iter()
            .map(|tag| tag.as_str().and_then(CellState::from_tag).unwrap_or_default())
            .collect(),
        Some(_) => return None,
    };

    Some(Row::from_parts(letters, &classes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ROWS, Word, score};

    fn played_grid() -> Grid {
        let target = Word::new("delve").unwrap();
        let mut grid = Grid::empty();
        for (i, guess) in ["crane", "level", "delve"].iter().enumerate() {
            let guess = Word::new(guess).unwrap();
            grid.set_row(i, Row::scored(&guess, score(&guess, &target)));
        }
        grid
    }

    #[test]
    fn encode_shape() {
        let encoded = encode(&Grid::empty());
        let value: Value = serde_json::from_str(&encoded).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[0]["letters"], "     ");
        assert_eq!(rows[0]["classes"].as_array().unwrap().len(), 5);
        assert_eq!(rows[0]["classes"][0], "state-empty");
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(encode(&played_grid()), encode(&played_grid()));
    }

    #[test]
    fn round_trip_played_grid() {
        let grid = played_grid();
        assert_eq!(decode(Some(&encode(&grid))), grid);
    }

    #[test]
    fn round_trip_full_grid() {
        let target = Word::new("slate").unwrap();
        let grid = Grid::from_rows(["crane", "eerie", "llama", "teeth", "kayak", "slate"].map(|g| {
            let guess = Word::new(g).unwrap();
            Row::scored(&guess, score(&guess, &target))
        }));
        assert_eq!(decode(Some(&encode(&grid))), grid);
    }

    #[test]
    fn malformed_input_yields_empty_grid() {
        for raw in [
            None,
            Some(""),
            Some("blahblah"),
            Some("{\"letters\": \"CRANE\"}"),
            Some("[1, 2, 3]"),
            Some("[{\"letters\": 5, \"classes\": []}]"),
            Some("[{\"letters\": \"CRANE\", \"classes\": \"state-correct\"}]"),
            Some("[[\"CRANE\"]]"),
            Some("null"),
        ] {
            assert_eq!(decode(raw), Grid::empty(), "{raw:?}");
        }
    }

    #[test]
    fn short_list_is_padded() {
        let grid = decode(Some(
            r#"[{"letters": "crane", "classes": ["state-correct", "state-absent"]}]"#,
        ));
        assert_eq!(grid.rows()[0].letters(), "CRANE");
        assert_eq!(
            grid.rows()[0].classes(),
            &[
                CellState::Correct,
                CellState::Absent,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty
            ]
        );
        assert!(grid.rows()[1..].iter().all(Row::is_empty));
    }

    #[test]
    fn long_list_is_truncated() {
        let row = r#"{"letters": "SLATE", "classes": []}"#;
        let raw = format!("[{}]", vec![row; 9].join(","));
        let grid = decode(Some(&raw));
        assert_eq!(grid.rows().len(), ROWS);
        assert_eq!(grid.guesses().count(), ROWS);
    }

    #[test]
    fn row_fields_are_normalized() {
        let grid = decode(Some(
            r#"[{"letters": "ab"}, {"classes": null}, {"letters": "toolong", "classes": ["bogus", 3, "state-present", "x", "y", "z"]}]"#,
        ));
        assert_eq!(grid.rows()[0].letters(), "AB   ");
        assert!(grid.rows()[1].is_empty());
        assert_eq!(grid.rows()[2].letters(), "TOOLO");
        assert_eq!(
            grid.rows()[2].classes(),
            &[
                CellState::Empty,
                CellState::Empty,
                CellState::Present,
                CellState::Empty,
                CellState::Empty
            ]
        );
    }
}
