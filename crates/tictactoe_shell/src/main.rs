//! Tic-tac-toe - terminal shell
//!
//! Interactive play, scripted replays and the view schema.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tictactoe_core::{Game, GameView, HistoryOrder};
use tictactoe_shell::{Cli, Command, Shell, ShellConfig, render};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, order } => run_play(config, order),
        Command::Replay { cells, json, order } => run_replay(cells, json, order),
        Command::Schema => run_schema(),
    }
}

/// Installs the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over `fallback` when set.
fn initialize_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
fn run_play(config_path: std::path::PathBuf, order: Option<HistoryOrder>) -> Result<()> {
    let mut config = ShellConfig::load_or_default(&config_path)?;
    if let Some(order) = order {
        config = config.with_history_order(order);
    }
    initialize_tracing(config.log_filter());

    info!(config = %config_path.display(), order = %config.history_order(), "Starting shell");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&config).run(stdin.lock(), stdout.lock())
}

/// Play `cells` in order and print the final view
#[instrument(skip(cells), fields(plies = cells.len()))]
fn run_replay(cells: Vec<usize>, json: bool, order: HistoryOrder) -> Result<()> {
    initialize_tracing("warn");

    let mut game = Game::with_order(order);
    for cell in cells {
        if let Err(e) = game.play(cell) {
            warn!(cell, error = %e, "Skipping rejected move");
            eprintln!("Skipped cell {}: {}", cell, e);
        }
    }

    let view = game.view();
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &view)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render(&view, true))?;
    }
    Ok(())
}

/// Print the JSON Schema of the game view
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(GameView);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
