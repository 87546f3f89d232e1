//! Move history snapshots.
//!
//! Before every mutating move the engine captures a full snapshot of the
//! mutable game fields. Undo pops the most recent snapshot and restores it
//! verbatim. Entries are immutable once captured and share no mutable
//! structure with the live state: the board and settings are `Copy`, and
//! the direction pool is cloned into inline storage.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::board::Board;
use super::config::GameSettings;
use super::direction::DirectionSet;
use super::player::Player;
use super::state::{GamePhase, GameState};

/// A pre-move snapshot of all mutable [`GameState`] fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board: Board,
    pub current_player: Player,
    pub phase: GamePhase,
    pub round: u32,
    pub available_directions: DirectionSet,
    pub winner: Option<Player>,
    pub stars_placed: u32,
    pub settings: GameSettings,

    /// Human-readable description of the move this snapshot precedes,
    /// e.g. `"Star placed at (2, 2)"`.
    pub action: String,

    /// When the snapshot was captured.
    pub timestamp: SystemTime,
}

impl HistoryEntry {
    /// Capture the current state of `state`, tagged with `action`.
    #[must_use]
    pub fn capture(state: &GameState, action: impl Into<String>) -> Self {
        Self {
            board: state.board,
            current_player: state.current_player,
            phase: state.phase,
            round: state.round,
            available_directions: state.available_directions.clone(),
            winner: state.winner,
            stars_placed: state.stars_placed,
            settings: state.settings,
            action: action.into(),
            timestamp: SystemTime::now(),
        }
    }

    /// Restore every captured field into `state`.
    ///
    /// Settings are restored too, although they are invariant in practice.
    /// Does not touch `updated_at`; the caller refreshes it.
    pub fn restore(&self, state: &mut GameState) {
        state.board = self.board;
        state.current_player = self.current_player;
        state.phase = self.phase;
        state.round = self.round;
        state.available_directions = self.available_directions.clone();
        state.winner = self.winner;
        state.stars_placed = self.stars_placed;
        state.settings = self.settings;
    }
}
