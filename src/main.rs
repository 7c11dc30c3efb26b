//! Wordish - CLI
//!
//! Five-letter word guessing game with TUI, line-mode and single-request modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io::Read;
use std::path::PathBuf;
use wordish::{
    commands::{fields_from_json, parse_field, run_simple, run_step},
    game::FormFields,
    wordlists::WordCatalog,
};

#[derive(Parser)]
#[command(
    name = "wordish",
    about = "Five-letter word guessing game built on a stateless state machine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list of acceptable guesses
    #[arg(long, global = true, default_value = "data/all_words.txt")]
    all_words: PathBuf,

    /// Word list random targets are drawn from
    #[arg(long, global = true, default_value = "data/target_words.txt")]
    target_words: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Start straight away with this target word
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Handle one request and print the resulting screen as JSON
    Step {
        /// Form field as name=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Read the form fields as a JSON object from stdin
        #[arg(long, conflicts_with = "fields")]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let catalog = WordCatalog::load(&cli.all_words, &cli.target_words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog),
        Commands::Simple { target } => {
            run_simple(&catalog, target.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Step { fields, json } => run_step_command(&catalog, fields, json),
    }
}

fn run_step_command(catalog: &WordCatalog, fields: Vec<(String, String)>, json: bool) -> Result<()> {
    let fields = if json {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read form fields from stdin")?;
        fields_from_json(&input)
    } else {
        FormFields::from_pairs(fields)
    };

    let response = run_step(catalog, fields);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_play_command(catalog: &WordCatalog) -> Result<()> {
    use wordish::interactive::{App, run_tui};

    let app = App::new(catalog);
    run_tui(app)
}
