//! Word lists for the game
//!
//! Loading, parsing and the read-only catalog built from them.

mod catalog;
pub mod loader;

pub use catalog::{ALL_WORDS_VAR, Dictionary, TARGET_WORDS_VAR, WordCatalog};
pub use loader::CatalogLoadError;
