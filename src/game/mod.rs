//! The stateless game
//!
//! Transport fields in, render command out. See [`machine`] for the flow.

pub mod codec;
mod error;
mod fields;
pub mod machine;
mod render;
mod snapshot;
pub mod validate;

pub use error::{DomainError, GridDefect, MALFORMED_FIELDS, StructuralError};
pub use fields::{FIELD_NAMES, FormFields, HiddenFields, Request};
pub use machine::{GameMachine, welcome};
pub use render::{RenderCommand, Renderer, Screen};
pub use snapshot::{GamePhase, GameSnapshot, GuessOutcome};
