//! Pure tic-tac-toe game logic.
//!
//! This crate has no display dependency. It owns the board, the
//! win/tie rules and the turn state machine; frontends drive it by
//! calling [`Game::play`] and [`Game::restart`] and read it back
//! through shared references.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center).unwrap();
//! assert_eq!(game.active_player(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{check_winner, evaluate, has_won, is_full, is_tie};
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};

/// Alias for clarity when talking about the symbol a player draws.
pub type Mark = Player;
