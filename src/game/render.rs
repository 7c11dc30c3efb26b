//! Render commands
//!
//! The machine never draws anything. It returns a [`RenderCommand`] naming
//! one of two screens, and the surrounding layer hands it to a [`Renderer`].

use super::snapshot::GameSnapshot;

/// Destination screen of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Game,
}

/// Output of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Show the start screen with a message; no game state survives
    Start { message: String },
    /// Show the board with a status line
    Game {
        status: String,
        snapshot: GameSnapshot,
    },
}

/// Something that can display the two screens
pub trait Renderer {
    type Output;

    fn render_start(&mut self, message: &str) -> Self::Output;

    fn render_game(&mut self, status: &str, snapshot: &GameSnapshot) -> Self::Output;
}

impl RenderCommand {
    pub(crate) fn start(message: impl Into<String>) -> Self {
        Self::Start {
            message: message.into(),
        }
    }

    pub(crate) fn game(status: impl Into<String>, snapshot: GameSnapshot) -> Self {
        Self::Game {
            status: status.into(),
            snapshot,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Start { .. } => Screen::Start,
            Self::Game { .. } => Screen::Game,
        }
    }

    /// The start-screen message or the game status
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Start { message } => message,
            Self::Game { status, .. } => status,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&GameSnapshot> {
        match self {
            Self::Start { .. } => None,
            Self::Game { snapshot, .. } => Some(snapshot),
        }
    }

    /// Dispatch to the matching renderer operation
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> R::Output {
        match self {
            Self::Start { message } => renderer.render_start(message),
            Self::Game { status, snapshot } => renderer.render_game(status, snapshot),
        }
    }
}
