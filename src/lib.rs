//! Wordish
//!
//! A five-letter word guessing game driven by a stateless state machine: every
//! request carries the whole game in a few hidden fields, and every response is
//! a screen to render.
//!
//! # Quick Start
//!
//! ```rust
//! use wordish::game::{FormFields, GameMachine, Screen};
//! use wordish::wordlists::WordCatalog;
//!
//! let catalog = WordCatalog::from_words(&["delve", "crane"], &["delve"]);
//! let machine = GameMachine::new(&catalog);
//!
//! // Start a game, then send the hidden fields back with a guess
//! let started = machine.start_game("delve");
//! let hidden = started.snapshot().unwrap().hidden_fields();
//! let next = machine.handle(&FormFields::guess(hidden, "crane").into_request());
//!
//! assert_eq!(next.screen(), Screen::Game);
//! assert_eq!(next.text(), "Guess accepted.");
//! ```

// Core domain types
pub mod core;

// Word lists and the catalog
pub mod wordlists;

// Stateless game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
