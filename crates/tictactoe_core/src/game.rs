//! Game session: the current history, the selected step and the list order.

use super::history::{History, apply_move, jump_to, player_for_step};
use super::listing::{HistoryOrder, history_entries};
use super::rules::{WinResult, evaluate_winner};
use super::status::{GameStatus, status};
use super::view::GameView;
use super::{Board, MoveError, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game session.
///
/// Owns the `(history, step)` pair. Every accepted move swaps in a new pair
/// as a whole; a rejected move leaves both untouched. The player to move is
/// never stored: it is read off the step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    step: usize,
    order: HistoryOrder,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a new game listing moves in `order`.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            order,
        }
    }

    /// Starts over from the empty board, keeping the list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "Starting a new game");
        self.history = History::new();
        self.step = 0;
    }

    /// Plays the current player's mark at `cell`.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`apply_move`]; the session is
    /// unchanged in that case.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        match apply_move(&self.history, self.step, cell) {
            Ok((history, step)) => {
                self.history = history;
                self.step = step;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                Err(e)
            }
        }
    }

    /// Selects `step` as the current step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not in the history; see [`jump_to`].
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        self.step = jump_to(&self.history, step);
    }

    /// Flips the list order.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "History order toggled");
    }

    /// The full history, including any future past the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The selected step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// The player to move from the current step.
    pub fn current_player(&self) -> Player {
        player_for_step(self.step)
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        // `step` only ever comes from `apply_move` or `jump_to`, both of
        // which keep it inside the history.
        &self.history.snapshots()[self.step]
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        status(self.current_board(), self.current_player())
    }

    /// The completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinResult> {
        evaluate_winner(self.current_board())
    }

    /// Everything a front end needs to draw the game.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn view(&self) -> GameView {
        GameView {
            cells: self
                .current_board()
                .squares()
                .iter()
                .map(|sq| sq.player())
                .collect(),
            status: self.status(),
            status_text: self.status().to_string(),
            step: self.step,
            order: self.order,
            history: history_entries(&self.history, self.order),
            winning_line: self.winning_line().map(|result| result.line),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.play(4).unwrap();
        let before = game.clone();

        assert!(game.play(4).is_err());
        assert!(game.play(42).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_turn_follows_step_after_jump() {
        let mut game = Game::new();
        for cell in [0, 1, 2, 3] {
            game.play(cell).unwrap();
        }
        for step in 0..game.history().len() {
            game.jump_to(step);
            let expected = if step % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(game.current_player(), expected);
        }
    }

    #[test]
    fn test_reset_keeps_order() {
        let mut game = Game::with_order(HistoryOrder::Descending);
        game.play(0).unwrap();
        game.reset();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.order(), HistoryOrder::Descending);
    }

    #[test]
    fn test_jump_back_shows_past_board_without_truncating() {
        let mut game = Game::new();
        for cell in [0, 4, 8] {
            game.play(cell).unwrap();
        }
        game.jump_to(1);

        assert_eq!(game.current_board().occupied(), 1);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
    }
}
