//! The game state machine
//!
//! A pure function of `(request, dictionary) -> RenderCommand`. No state is
//! kept between calls: a continuation request carries the whole game in its
//! hidden fields, and the response carries the next one.
//!
//! Continuation requests pass two gates in order:
//! - a structural gate over the hidden fields (see [`super::validate`]); a
//!   failure discards the game and returns to the start screen
//! - a domain gate over the guess; a failure keeps the player on the board
//!   with an inline error

use super::codec;
use super::error::{DomainError, MALFORMED_FIELDS};
use super::fields::{HiddenFields, Request};
use super::render::RenderCommand;
use super::snapshot::{GameSnapshot, GuessOutcome};
use super::validate::check_hidden_fields;
use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::Rng;

/// Initial start-screen message
pub const WELCOME: &str = "Welcome to Wordish!";

pub const GAME_STARTED: &str = "Game started. Enter your first guess!";

pub const GAME_ALREADY_OVER: &str = "Game over. Start a new game to play again.";

pub const GUESS_ACCEPTED: &str = "Guess accepted.";

pub const YOU_WIN: &str = "You win!";

/// Status for a lost game
#[must_use]
pub fn you_lose(target: &Word) -> String {
    format!("You lose. The word was {target}.")
}

/// The start screen shown before any game
#[must_use]
pub fn welcome() -> RenderCommand {
    RenderCommand::start(WELCOME)
}

/// Stateless game engine over an injected dictionary
pub struct GameMachine<'a, D: Dictionary> {
    dictionary: &'a D,
}

impl<'a, D: Dictionary> GameMachine<'a, D> {
    pub const fn new(dictionary: &'a D) -> Self {
        Self { dictionary }
    }

    /// Handle one inbound request
    #[must_use]
    pub fn handle(&self, request: &Request) -> RenderCommand {
        match request {
            Request::Start { target_text } => self.start_game(target_text),
            Request::Guess { hidden, guess_text } => self.submit_guess(hidden, guess_text),
        }
    }

    /// Start a game with a player-chosen target
    ///
    /// # Examples
    /// ```
    /// use wordish::game::{GameMachine, Screen};
    /// use wordish::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_words(&["delve"], &[]);
    /// let machine = GameMachine::new(&catalog);
    ///
    /// let response = machine.start_game("delve");
    /// assert_eq!(response.screen(), Screen::Game);
    /// assert!(response.text().contains("Game started"));
    ///
    /// assert_eq!(machine.start_game("test").screen(), Screen::Start);
    /// ```
    #[must_use]
    pub fn start_game(&self, target_text: &str) -> RenderCommand {
        let Ok(target) = Word::new(target_text) else {
            return RenderCommand::start(DomainError::TargetNotFiveLetters.message());
        };

        if !self.dictionary.contains(&target) {
            return RenderCommand::start(DomainError::TargetNotAWord.message());
        }

        Self::begin(target)
    }

    /// Start a game with a target drawn from the dictionary's target list
    pub fn start_random<R: Rng + ?Sized>(&self, rng: &mut R) -> RenderCommand {
        match self.dictionary.random_target(rng) {
            Some(target) => Self::begin(target.clone()),
            None => RenderCommand::start(DomainError::NoTargetWords.message()),
        }
    }

    /// Advance the game carried in `hidden` by one guess
    #[must_use]
    pub fn submit_guess(&self, hidden: &HiddenFields, guess_text: &str) -> RenderCommand {
        let checked = match check_hidden_fields(hidden) {
            Ok(checked) => checked,
            Err(e) => {
                log::debug!("discarding game: {e}");
                return RenderCommand::start(MALFORMED_FIELDS);
            }
        };

        let mut snapshot = GameSnapshot {
            target: checked.target,
            grid: codec::decode(hidden.grid_json.as_deref()),
            row_index: checked.row_index,
            game_over: checked.game_over,
        };

        if snapshot.game_over {
            return RenderCommand::game(GAME_ALREADY_OVER, snapshot);
        }

        let Ok(guess) = Word::new(guess_text) else {
            return RenderCommand::game(DomainError::GuessNotFiveLetters.message(), snapshot);
        };

        if !self.dictionary.contains(&guess) {
            return RenderCommand::game(DomainError::GuessNotAWord.message(), snapshot);
        }

        let status = match snapshot.apply_guess(&guess) {
            GuessOutcome::Won => YOU_WIN.to_string(),
            GuessOutcome::Lost => you_lose(&snapshot.target),
            GuessOutcome::Continue => GUESS_ACCEPTED.to_string(),
        };
        RenderCommand::game(status, snapshot)
    }

    fn begin(target: Word) -> RenderCommand {
        RenderCommand::game(GAME_STARTED, GameSnapshot::new(target))
    }
}
