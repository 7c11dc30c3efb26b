//! Per-letter feedback classes
//!
//! Each cell of the board carries one of four states. On the wire a state is
//! written as its CSS-style tag (`state-empty`, `state-absent`, ...).

use serde::Serialize;

/// Feedback for one letter of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CellState {
    /// Cell not yet guessed
    #[default]
    #[serde(rename = "state-empty")]
    Empty,
    /// Letter not in the target (or all occurrences already accounted for)
    #[serde(rename = "state-absent")]
    Absent,
    /// Letter in the target, wrong position
    #[serde(rename = "state-present")]
    Present,
    /// Letter in the correct position
    #[serde(rename = "state-correct")]
    Correct,
}

impl CellState {
    /// Wire tag for this state
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Empty => "state-empty",
            Self::Absent => "state-absent",
            Self::Present => "state-present",
            Self::Correct => "state-correct",
        }
    }

    /// Parse a wire tag, `None` if unrecognized
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "state-empty" => Some(Self::Empty),
            "state-absent" => Some(Self::Absent),
            "state-present" => Some(Self::Present),
            "state-correct" => Some(Self::Correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Empty => '⬛',
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}
