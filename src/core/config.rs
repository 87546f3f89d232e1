//! Game configuration.
//!
//! Settings are resolved once when a game is created and never re-merged
//! mid-game; every history snapshot carries the settings it was taken under.

use serde::{Deserialize, Serialize};

/// Per-game settings, fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of rounds before the winner is decided. Must be at least 1.
    /// The winner check fires once `round` strictly exceeds this value.
    pub number_of_rounds: u32,

    /// Player 1 wins if at least this many cells are still empty when the
    /// round limit is reached; otherwise Player 2 wins.
    pub empty_squares_to_win: u32,

    /// Informational only: the nominal number of directions in play.
    /// Not enforced against the direction pool; the pool always starts
    /// with all eight compass directions.
    pub max_directions: u32,
}

impl GameSettings {
    /// Set the round limit.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.number_of_rounds = rounds;
        self
    }

    /// Set the empty-square threshold for a Player 1 win.
    #[must_use]
    pub fn with_empty_squares_to_win(mut self, threshold: u32) -> Self {
        self.empty_squares_to_win = threshold;
        self
    }

    /// Set the informational direction cap.
    #[must_use]
    pub fn with_max_directions(mut self, max: u32) -> Self {
        self.max_directions = max;
        self
    }
}

impl Default for GameSettings {
    /// Standard game: 8 rounds, one empty square suffices for Player 1.
    fn default() -> Self {
        Self {
            number_of_rounds: 8,
            empty_squares_to_win: 1,
            max_directions: 8,
        }
    }
}
