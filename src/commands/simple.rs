//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Every turn goes through the same stateless
//! round trip a web client would make: the previous response's hidden fields
//! plus the typed guess form the next request.

use crate::game::{FormFields, GameMachine, GamePhase, RenderCommand, Renderer};
use crate::output::TerminalRenderer;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Starts with `target` if given, otherwise asks for one (blank draws a
/// random target).
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary>(dictionary: &D, target: Option<&str>) -> Result<(), String> {
    let machine = GameMachine::new(dictionary);
    let mut renderer = TerminalRenderer;
    let mut rng = rand::rng();

    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut screen = match target {
        Some(target) => machine.start_game(target),
        None => crate::game::welcome(),
    };
    let mut played = 0usize;
    let mut won = 0usize;

    loop {
        screen.render(&mut renderer);

        let next = match &screen {
            RenderCommand::Start { .. } => {
                let input = get_user_input("Target word (blank for random)")?;
                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => break,
                    "" => machine.start_random(&mut rng),
                    _ => machine.handle(&FormFields::start(input).into_request()),
                }
            }
            RenderCommand::Game { snapshot, .. } if snapshot.game_over => {
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" | "new" => crate::game::welcome(),
                    _ => break,
                }
            }
            RenderCommand::Game { snapshot, .. } => {
                let input = get_user_input("Guess")?;
                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => break,
                    "new" => crate::game::welcome(),
                    _ => machine.handle(
                        &FormFields::guess(snapshot.hidden_fields(), input).into_request(),
                    ),
                }
            }
        };

        if let Some(snapshot) = next.snapshot()
            && snapshot.game_over
            && screen.snapshot().is_some_and(|s| !s.game_over)
        {
            played += 1;
            if snapshot.phase() == GamePhase::Won {
                won += 1;
            }
        }
        screen = next;
    }

    if played > 0 {
        println!(
            "\n{} {played} played, {won} won",
            "Games:".bright_cyan().bold()
        );
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
