//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: win and draw evaluation over a single [`Board`]
//! - **History**: board snapshots, the move applier and the navigator
//! - **Listing**: move-list labels and display order
//! - **Game**: a session owning the current history and step
//!
//! Nothing here draws anything. A front end reads a [`GameView`] and feeds
//! user actions back through [`Game`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 3, 2, 6] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//! assert_eq!(game.view().winning_line, Some([0, 3, 6]));
//!
//! game.jump_to(2);
//! assert_eq!(game.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod listing;
mod locate;
mod position;
mod status;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::MoveError;
pub use game::Game;
pub use history::{History, Move, apply_move, jump_to, player_for_step};
pub use invariants::InvariantViolation;
pub use listing::{HistoryEntry, HistoryOrder, history_entries};
pub use locate::{locate_move, try_locate_move};
pub use position::{Location, Position};
pub use rules::{WinResult, evaluate_winner, is_draw};
pub use status::{GameStatus, status};
pub use types::{Board, CELLS, COLS, Player, ROWS, Square};
pub use view::GameView;
