//! Command-line interface for the tic-tac-toe shell.

use clap::{Parser, Subcommand};
use tictactoe_core::HistoryOrder;

/// Tic-tac-toe with a move list you can travel back through
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to shell configuration
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Move list order (ascending or descending), overrides the config
        #[arg(long)]
        order: Option<HistoryOrder>,
    },

    /// Play a fixed sequence of cells and print the final position
    Replay {
        /// Cells to play in order (0-8, row-major)
        cells: Vec<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Move list order (ascending or descending)
        #[arg(long, default_value = "ascending")]
        order: HistoryOrder,
    },

    /// Print the JSON Schema of the game view
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0", "4", "8", "--json"]).unwrap();
        match cli.command {
            Command::Replay { cells, json, order } => {
                assert_eq!(cells, [0, 4, 8]);
                assert!(json);
                assert_eq!(order, HistoryOrder::Ascending);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_order_override() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--order", "descending"]).unwrap();
        match cli.command {
            Command::Play { config, order } => {
                assert_eq!(config, std::path::PathBuf::from("tictactoe.toml"));
                assert_eq!(order, Some(HistoryOrder::Descending));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_order_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "--order", "sideways"]).is_err());
    }
}
