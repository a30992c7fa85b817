//! Terminal shell for time-travel tic-tac-toe.
//!
//! A thin front end over [`tictactoe_core`]: it parses commands, forwards
//! them to a [`Game`](tictactoe_core::Game) and draws the resulting view as
//! text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod shell;

pub use cli::{Cli, Command};
pub use command::{HELP, ShellCommand, ShellError};
pub use config::{ConfigError, ShellConfig};
pub use render::{render, render_board, render_history};
pub use shell::{Flow, Shell};
