//! Terminal output formatting
//!
//! Display utilities for the line-mode game.

pub mod display;
pub mod formatters;

pub use display::TerminalRenderer;
