//! TUI application state and logic
//!
//! The app never keeps game state of its own: it holds the last
//! [`RenderCommand`] and builds each request from that response's hidden
//! fields, exactly like a browser posting a form.

use crate::core::WORD_LEN;
use crate::game::machine::WELCOME;
use crate::game::{FormFields, GameMachine, GamePhase, RenderCommand, welcome};
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub machine: GameMachine<'a, WordCatalog>,
    pub screen: RenderCommand,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

/// What the input box currently collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Target,
    Guess,
    GameOver,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a WordCatalog) -> Self {
        let mut app = Self {
            machine: GameMachine::new(catalog),
            screen: welcome(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(WELCOME, MessageStyle::Info);
        app.add_message("Type a target word, or press Enter for a random one", MessageStyle::Info);
        app
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.screen.snapshot() {
            None => InputMode::Target,
            Some(snapshot) if snapshot.game_over => InputMode::GameOver,
            Some(_) => InputMode::Guess,
        }
    }

    /// Submit the input buffer as a target or a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let next = match (self.input_mode(), self.screen.snapshot()) {
            (InputMode::Target, _) if input.trim().is_empty() => {
                self.machine.start_random(&mut rand::rng())
            }
            (InputMode::Target, _) => self.machine.handle(&FormFields::start(input).into_request()),
            (InputMode::Guess, Some(snapshot)) => self
                .machine
                .handle(&FormFields::guess(snapshot.hidden_fields(), input).into_request()),
            _ => return,
        };
        self.show(next);
    }

    /// Abandon the current game and return to the start screen
    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.show(welcome());
    }

    /// Accept a typed character
    pub fn push_char(&mut self, c: char) {
        let limit = match self.input_mode() {
            InputMode::Target | InputMode::Guess => WORD_LEN * 2,
            InputMode::GameOver => 0,
        };
        if self.input_buffer.chars().count() < limit && !c.is_control() {
            self.input_buffer.push(c);
        }
    }

    fn show(&mut self, next: RenderCommand) {
        let finished_now = next.snapshot().is_some_and(|s| s.game_over)
            && self.screen.snapshot().is_some_and(|s| !s.game_over);

        if finished_now && let Some(snapshot) = next.snapshot() {
            self.stats.total_games += 1;
            if snapshot.phase() == GamePhase::Won {
                self.stats.games_won += 1;
                let used = snapshot.guesses_used();
                if let Some(slot) = self.stats.guess_distribution.get_mut(used) {
                    *slot += 1;
                }
            }
        }

        let style = if next.snapshot().is_some_and(|s| s.phase() == GamePhase::Won) {
            MessageStyle::Success
        } else if next.text().contains("invalid") {
            MessageStyle::Error
        } else {
            MessageStyle::Info
        };
        self.add_message(next.text(), style);
        self.screen = next;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('q') if app.input_mode() == InputMode::GameOver => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') | KeyCode::Enter if app.input_mode() == InputMode::GameOver => {
                    app.new_game();
                }
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
