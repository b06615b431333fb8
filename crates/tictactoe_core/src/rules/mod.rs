//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be checked without a running game.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{check_winner, has_won};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Status of the board right after `mover` placed a mark.
///
/// A win is checked before a full board, so a last move that both
/// fills the board and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> GameStatus {
    if has_won(board, mover) {
        GameStatus::Won(mover)
    } else if is_tie(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Position, Square};
    use super::*;

    #[test]
    fn test_full_board_with_diagonal_is_win() {
        // X O O / O X X / X O X, X completes the main diagonal last
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::X),
        ] {
            board.place(pos, player).unwrap();
        }
        assert!(board.squares().iter().all(|s| *s != Square::Empty));
        assert_eq!(evaluate(&board, Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_open_board_in_progress() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert_eq!(evaluate(&board, Player::X), GameStatus::InProgress);
    }
}
