//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true when no square is left to play.
///
/// This says nothing about lines. Callers check for a win first and
/// only then treat a full board as a tie; see [`super::evaluate`].
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
}
