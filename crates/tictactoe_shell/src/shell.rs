//! Interactive line-oriented front end.
//!
//! The shell owns a [`Game`], reads one command per line, forwards it to the
//! core and redraws from the resulting [`GameView`](tictactoe_core::GameView).
//! It never works out turns or results itself.

use crate::command::{HELP, ShellCommand};
use crate::config::ShellConfig;
use crate::render::{render, render_history};
use std::io::{BufRead, Write};
use tictactoe_core::Game;
use tracing::{debug, info, instrument, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Terminal game shell.
#[derive(Debug, Clone)]
pub struct Shell {
    game: Game,
    show_history: bool,
}

impl Shell {
    /// Creates a shell from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            game: Game::with_order(*config.history_order()),
            show_history: *config.show_history(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command, writing any feedback to `out`.
    ///
    /// Returns whether the board should be redrawn and whether to go on.
    #[instrument(skip(self, out))]
    pub fn handle(
        &mut self,
        command: ShellCommand,
        out: &mut impl Write,
    ) -> std::io::Result<(bool, Flow)> {
        match command {
            ShellCommand::Play(cell) => match self.game.play(cell) {
                Ok(()) => Ok((true, Flow::Continue)),
                Err(e) => {
                    writeln!(out, "Ignored: {}", e)?;
                    Ok((false, Flow::Continue))
                }
            },
            ShellCommand::Jump(step) => {
                // Only steps on the list reach the core.
                if step < self.game.history().len() {
                    self.game.jump_to(step);
                    Ok((true, Flow::Continue))
                } else {
                    debug!(step, "Jump outside history");
                    writeln!(
                        out,
                        "No step {}; the move list runs from 0 to {}",
                        step,
                        self.game.history().len() - 1
                    )?;
                    Ok((false, Flow::Continue))
                }
            }
            ShellCommand::ToggleOrder => {
                self.game.toggle_order();
                writeln!(out, "Move list order: {}", self.game.order())?;
                Ok((true, Flow::Continue))
            }
            ShellCommand::NewGame => {
                self.game.reset();
                Ok((true, Flow::Continue))
            }
            ShellCommand::History => {
                write!(out, "{}", render_history(&self.game.view()))?;
                Ok((false, Flow::Continue))
            }
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
                Ok((false, Flow::Continue))
            }
            ShellCommand::Quit => Ok((false, Flow::Quit)),
        }
    }

    /// Runs the read-eval-draw loop until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        info!("Shell started");
        write!(out, "{}", render(&self.game.view(), self.show_history))?;
        writeln!(out, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "Unparsed input");
                    writeln!(out, "{} (type `help`)", e)?;
                    continue;
                }
            };

            let (redraw, flow) = self.handle(command, &mut out)?;
            if flow == Flow::Quit {
                break;
            }
            if redraw {
                write!(out, "\n{}", render(&self.game.view(), self.show_history))?;
            }
            out.flush()?;
        }

        info!(plies = self.game.history().len() - 1, "Shell finished");
        Ok(())
    }
}
