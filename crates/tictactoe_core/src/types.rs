//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::outcome::Outcome;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|position| self.get(position))
    }

    /// Writes `player` into the empty square at `(row, col)`.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(position, player)
    }

    /// Writes `player` into the empty square at `position`.
    ///
    /// Occupied squares are never overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.squares[position.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Resets every square to [`Square::Empty`].
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; BOARD_SIZE * BOARD_SIZE];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE * BOARD_SIZE] {
        &self.squares
    }

    /// Iterates over every position together with its square.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        Position::ALL
            .iter()
            .map(move |&position| (position, self.get(position)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.squares[row * BOARD_SIZE + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                f.write_str(&symbol)?;
                if col < BOARD_SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; moves are accepted.
    #[default]
    InProgress,
    /// Game ended with a player completing a line.
    Won(Player),
    /// Game ended with a full board and no line.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has been won or tied.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Converts a terminal status into its [`Outcome`].
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Tied => Some(Outcome::Tie),
        }
    }
}
