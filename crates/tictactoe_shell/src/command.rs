//! Parsing of interactive shell input.

use tictactoe_core::Position;
use tracing::instrument;

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Play the current player's mark at a cell.
    Play(usize),
    /// Select a history step.
    Jump(usize),
    /// Flip the move list order.
    ToggleOrder,
    /// Start a new game.
    NewGame,
    /// Print the move list.
    History,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ShellError {
    /// Nothing recognisable was typed.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// `jump` without a usable step number.
    #[display("Usage: jump <step>")]
    MissingStep,
}

impl std::error::Error for ShellError {}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <0-8> | <cell name>   play a cell (e.g. `4` or `center`)
  jump <k> | j <k>      go back to step k of the move list
  order                 toggle ascending/descending move list
  history               show the move list
  new                   start a new game
  help                  show this help
  quit | q              leave";

impl std::str::FromStr for ShellCommand {
    type Err = ShellError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();

        match head.as_str() {
            "jump" | "j" => match (words.next().map(str::parse::<usize>), words.next()) {
                (Some(Ok(step)), None) => Ok(ShellCommand::Jump(step)),
                _ => Err(ShellError::MissingStep),
            },
            "order" => Ok(ShellCommand::ToggleOrder),
            "new" => Ok(ShellCommand::NewGame),
            "history" | "h" => Ok(ShellCommand::History),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
            _ => {
                // Bare numbers are handed to the core even when off the
                // board, so range checking stays in one place.
                if let Ok(cell) = line.parse::<usize>() {
                    return Ok(ShellCommand::Play(cell));
                }
                Position::from_label(line)
                    .map(|pos| ShellCommand::Play(pos.to_index()))
                    .ok_or_else(|| ShellError::Unknown(line.to_string()))
            }
        }
    }
}
