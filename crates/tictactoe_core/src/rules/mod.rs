//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so the history
//! and status layers can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, WinResult, evaluate_winner};
