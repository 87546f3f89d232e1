//! The game state aggregate.
//!
//! `GameState` is a plain value: the engine holds no process-wide state and
//! every operation is a synchronous transformation of one `GameState`.
//! Callers load a state, apply one move through [`crate::rules`], and
//! persist the result; serializing a state and deserializing it reproduces
//! an identical value, nested settings and full history included.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

use super::board::Board;
use super::config::GameSettings;
use super::direction::DirectionSet;
use super::history::HistoryEntry;
use super::player::Player;

/// Which kind of move is currently legal.
///
/// The phase and the player to move are always consistent: Player 1 acts
/// only in `Placement`, Player 2 only in `Direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player 1 places a star on an empty cell.
    Placement,
    /// Player 2 projects rays from all stars in a chosen direction.
    Direction,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Placement => f.write_str("placement"),
            GamePhase::Direction => f.write_str("direction"),
        }
    }
}

/// Opaque unique game identifier, assigned at creation and never reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    /// Allocate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The aggregate root: one complete game.
///
/// History uses [`im::Vector`] so cloning a whole game (for example when a
/// store hands out an owned copy) shares the snapshot spine instead of
/// copying every entry; entries themselves are immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,
    pub board: Board,
    pub current_player: Player,
    pub phase: GamePhase,

    /// Starts at 1; incremented once per completed direction move.
    pub round: u32,

    pub available_directions: DirectionSet,

    /// `None` until the round limit is exceeded, then permanent.
    pub winner: Option<Player>,

    /// Count of placement moves made, net of undo.
    pub stars_placed: u32,

    /// Pre-move snapshots, most recent last. Append-only except for
    /// pop-on-undo.
    pub history: Vector<HistoryEntry>,

    pub settings: GameSettings,

    pub created_at: SystemTime,

    /// Refreshed on every mutating operation.
    pub updated_at: SystemTime,
}

impl GameState {
    /// Create a fresh game: empty board, all eight directions available,
    /// round 1, Player 1 to place, no winner, empty history.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        let now = SystemTime::now();
        Self {
            id: GameId::new(),
            board: Board::new(),
            current_player: Player::One,
            phase: GamePhase::Placement,
            round: 1,
            available_directions: DirectionSet::full(),
            winner: None,
            stars_placed: 0,
            history: Vector::new(),
            settings,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Capture a pre-move snapshot tagged with `action` and push it onto
    /// the history stack.
    pub fn push_history(&mut self, action: impl Into<String>) {
        let entry = HistoryEntry::capture(self, action);
        self.history.push_back(entry);
    }

    /// Pop the most recent history entry, if any.
    pub fn pop_history(&mut self) -> Option<HistoryEntry> {
        self.history.pop_back()
    }

    /// Refresh `updated_at`. Called by every mutating operation.
    pub fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
