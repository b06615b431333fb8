//! Turn state machine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::types::{Board, GameStatus, Player};
use super::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game: board, whose turn it is, and the round status.
///
/// While the status is [`GameStatus::InProgress`] the game accepts
/// moves. Once it is won or tied every move is refused with
/// [`MoveError::GameOver`] until [`Game::restart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    active_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    ///
    /// The turn passes on every accepted move, including the one that
    /// ends the round, so after a win this names the loser.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the round is won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Places the active player's mark at `position`.
    ///
    /// Returns the status after the move. On error the game is left
    /// untouched.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.active_player;
        self.board.place(position, player)?;
        let mv = Move::new(player, position);
        self.history.push(mv);

        self.status = rules::evaluate(&self.board, player);
        self.active_player = player.opponent();

        match self.status.outcome() {
            Some(outcome) => info!(%mv, %outcome, moves = self.history.len(), "Round finished"),
            None => debug!(%mv, next = %self.active_player, "Move accepted"),
        }

        Ok(self.status)
    }

    /// Places the active player's mark at `(row, col)`.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(position)
    }

    /// Clears the board and history and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.active_player = Player::X;
        info!("Game restarted");
    }

    /// Replays moves on a fresh game, in order.
    ///
    /// Moves name positions only; marks alternate starting with X.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &position in positions {
            game.play(position)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
