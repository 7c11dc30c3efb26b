//! Transport fields
//!
//! Between turns the whole game lives in a handful of form fields owned by
//! the client. Everything here is raw and untrusted; validation happens in
//! the state machine.

use serde::Serialize;
use serde_json::Value;

/// Names of the recognized inbound fields
pub const FIELD_NAMES: [&str; 6] = [
    "target_text",
    "target",
    "grid_json",
    "row_index",
    "game_over",
    "guess_text",
];

/// The hidden fields that carry a game between requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HiddenFields {
    pub target: Option<String>,
    pub grid_json: Option<String>,
    pub row_index: Option<String>,
    pub game_over: Option<String>,
}

/// Every field an inbound request may carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub target_text: Option<String>,
    pub hidden: HiddenFields,
    pub guess_text: Option<String>,
}

/// What an inbound request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Start a new game with a player-chosen target
    Start { target_text: String },
    /// Continue the game carried in the hidden fields
    Guess {
        hidden: HiddenFields,
        guess_text: String,
    },
}

impl FormFields {
    /// Collect fields from `(name, value)` pairs
    ///
    /// Unknown names are ignored; a repeated name keeps the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = Self::default();
        for (name, value) in pairs {
            fields.set(name.as_ref(), value);
        }
        fields
    }

    /// Collect fields from a flat JSON object
    ///
    /// Strings are taken as-is and `null` counts as absent. Any other value
    /// is kept as its JSON text, so `"row_index": 0` arrives as `"0"`. A
    /// non-object yields no fields at all.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self::from_pairs(object.iter().filter_map(|(name, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((name, text))
        }))
    }

    /// Set one field by name, returning false for an unknown name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "target_text" => &mut self.target_text,
            "target" => &mut self.hidden.target,
            "grid_json" => &mut self.hidden.grid_json,
            "row_index" => &mut self.hidden.row_index,
            "game_over" => &mut self.hidden.game_over,
            "guess_text" => &mut self.guess_text,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Fields for a start request
    #[must_use]
    pub fn start(target_text: impl Into<String>) -> Self {
        Self {
            target_text: Some(target_text.into()),
            ..Self::default()
        }
    }

    /// Fields for a guess against the game carried in `hidden`
    #[must_use]
    pub fn guess(hidden: HiddenFields, guess_text: impl Into<String>) -> Self {
        Self {
            target_text: None,
            hidden,
            guess_text: Some(guess_text.into()),
        }
    }

    /// Classify the request
    ///
    /// A non-blank `target_text` starts a new game; anything else is treated
    /// as a continuation and left to the state machine to validate.
    #[must_use]
    pub fn into_request(self) -> Request {
        match self.target_text {
            Some(target_text) if !target_text.trim().is_empty() => Request::Start { target_text },
            _ => Request::Guess {
                hidden: self.hidden,
                guess_text: self.guess_text.unwrap_or_default(),
            },
        }
    }
}
