//! Single stateless request
//!
//! Feeds one set of form fields through the state machine and reports the
//! resulting screen as JSON, the way a web layer would consume it. The
//! `target`, `grid_json`, `row_index` and `game_over` keys of a game response
//! are exactly the hidden fields to send back with the next guess.

use crate::game::{FIELD_NAMES, FormFields, GameMachine, GameSnapshot, HiddenFields, Renderer};
use crate::wordlists::Dictionary;
use serde::Serialize;
use serde_json::Value;

/// JSON shape of a step response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum StepResponse {
    Start {
        message: String,
    },
    Game {
        status: String,
        #[serde(flatten)]
        fields: HiddenFields,
    },
}

/// Renders screens into [`StepResponse`] values
#[derive(Debug, Default)]
pub struct StepRenderer;

impl Renderer for StepRenderer {
    type Output = StepResponse;

    fn render_start(&mut self, message: &str) -> StepResponse {
        StepResponse::Start {
            message: message.to_string(),
        }
    }

    fn render_game(&mut self, status: &str, snapshot: &GameSnapshot) -> StepResponse {
        StepResponse::Game {
            status: status.to_string(),
            fields: snapshot.hidden_fields(),
        }
    }
}

/// Parse a `name=value` command-line field
///
/// # Errors
/// Returns a message if there is no `=` or the name is not a form field.
pub fn parse_field(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))?;

    if !FIELD_NAMES.contains(&name) {
        return Err(format!(
            "unknown field '{name}', expected one of: {}",
            FIELD_NAMES.join(", ")
        ));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Read form fields from a JSON object
///
/// Text that is not JSON yields no fields, which the state machine answers
/// with the start screen like any other malformed request.
#[must_use]
pub fn fields_from_json(input: &str) -> FormFields {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => FormFields::from_json(&value),
        Err(e) => {
            log::warn!("form fields are not JSON: {e}");
            FormFields::default()
        }
    }
}

/// Handle one request
pub fn run_step<D: Dictionary>(dictionary: &D, fields: FormFields) -> StepResponse {
    let machine = GameMachine::new(dictionary);
    machine
        .handle(&fields.into_request())
        .render(&mut StepRenderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MALFORMED_FIELDS;
    use crate::wordlists::WordCatalog;
    use serde_json::json;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(&["delve", "crane"], &["delve"])
    }

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            parse_field("grid_json=[{\"a\":1}]=x"),
            Ok(("grid_json".to_string(), "[{\"a\":1}]=x".to_string()))
        );
        assert_eq!(
            parse_field("guess_text="),
            Ok(("guess_text".to_string(), String::new()))
        );
        assert!(parse_field("guess_text").is_err());
        assert!(parse_field("bogus=1").is_err());
    }

    #[test]
    fn start_then_guess_through_json() {
        let catalog = catalog();

        let started = run_step(&catalog, FormFields::start("delve"));
        let StepResponse::Game { fields, .. } = started else {
            panic!("expected game screen");
        };

        let next = run_step(&catalog, FormFields::guess(fields, "crane"));
        let value = serde_json::to_value(&next).unwrap();
        assert_eq!(value["screen"], "game");
        assert_eq!(value["status"], "Guess accepted.");
        assert_eq!(value["target"], "DELVE");
        assert_eq!(value["row_index"], "1");
        assert_eq!(value["game_over"], "0");
        assert!(value["grid_json"].as_str().unwrap().contains("CRANE"));
    }

    #[test]
    fn json_fields_accept_numeric_scalars() {
        let catalog = catalog();
        let StepResponse::Game { fields, .. } = run_step(&catalog, FormFields::start("delve")) else {
            panic!("expected game screen");
        };
        let input = json!({
            "target": fields.target,
            "grid_json": fields.grid_json,
            "row_index": 0,
            "game_over": 0,
            "guess_text": "crane",
        })
        .to_string();

        let value = serde_json::to_value(run_step(&catalog, fields_from_json(&input))).unwrap();
        assert_eq!(value["screen"], "game");
        assert_eq!(value["status"], "Guess accepted.");
        assert_eq!(value["row_index"], "1");
    }

    #[test]
    fn unreadable_json_renders_start_screen() {
        for input in ["{not json", "[1, 2]", r#"{"row_index": [0]}"#] {
            let value = serde_json::to_value(run_step(&catalog(), fields_from_json(input))).unwrap();
            assert_eq!(value, json!({"screen": "start", "message": MALFORMED_FIELDS}));
        }
    }

    #[test]
    fn structural_error_serializes_as_start_screen() {
        let fields = FormFields::from_pairs([
            ("target", "DELVE"),
            ("grid_json", "blahblah"),
            ("row_index", "0"),
            ("game_over", "0"),
            ("guess_text", "first"),
        ]);
        let value = serde_json::to_value(run_step(&catalog(), fields)).unwrap();
        assert_eq!(value, json!({"screen": "start", "message": MALFORMED_FIELDS}));
    }
}
