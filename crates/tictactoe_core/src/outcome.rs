//! Result of a finished round.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
///
/// The `Display` form is the line announced when the round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Player completed a line.
    #[display("{} wins!", _0)]
    Winner(Player),
    /// Board filled with no line.
    #[display("It's a tie!")]
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}
