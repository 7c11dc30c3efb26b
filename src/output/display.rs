//! Line-mode rendering of the two screens

use super::formatters::{KEYBOARD_ROWS, colored_row, grid_to_emoji, keyboard_states, tile};
use crate::core::CellState;
use crate::game::{GamePhase, GameSnapshot, Renderer};
use colored::Colorize;

/// Prints screens to stdout with coloured tiles
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    type Output = ();

    fn render_start(&mut self, message: &str) {
        println!("\n{}", "═".repeat(40).cyan());
        println!(" {}", "WORDISH".bright_cyan().bold());
        println!("{}", "═".repeat(40).cyan());
        println!("\n  {}\n", message_style(message));
    }

    fn render_game(&mut self, status: &str, snapshot: &GameSnapshot) {
        println!();
        for row in snapshot.grid.rows() {
            println!("  {}", colored_row(row));
        }
        println!();
        print_keyboard(snapshot);
        println!("\n  {}\n", message_style(status));

        match snapshot.phase() {
            GamePhase::InProgress => {}
            GamePhase::Won => {
                let used = snapshot.guesses_used();
                println!(
                    "  {} in {} {}\n",
                    "Solved".bright_green().bold(),
                    used.to_string().bright_cyan().bold(),
                    if used == 1 { "guess" } else { "guesses" }
                );
                println!("{}\n", grid_to_emoji(&snapshot.grid));
            }
            GamePhase::Lost => {
                println!("{}\n", grid_to_emoji(&snapshot.grid));
            }
        }
    }
}

fn print_keyboard(snapshot: &GameSnapshot) {
    let states = keyboard_states(&snapshot.grid);
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = keys
            .chars()
            .map(|key| {
                let state = states.get(&key).copied().unwrap_or(CellState::Empty);
                tile(Some(key), state).to_string()
            })
            .collect();
        println!("  {}{line}", " ".repeat(indent * 2));
    }
}

fn message_style(text: &str) -> colored::ColoredString {
    if text.contains("invalid") {
        text.red().bold()
    } else if text.starts_with("You win") {
        text.green().bold()
    } else {
        text.bright_white()
    }
}
