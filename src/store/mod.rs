//! In-memory game storage.
//!
//! The engine itself never touches storage; it operates on one
//! [`GameState`] value at a time. `GameStore` is the thin collaborator a
//! hosting layer would use: load a full snapshot by id, apply one move
//! through [`crate::rules`], save the result back. The store is
//! single-threaded by design; callers serialize concurrent access per
//! game id.
//!
//! [`encode_snapshot`]/[`decode_snapshot`] give the byte-level form of the
//! same full structural snapshot (nested settings and complete history
//! included) for durable storage.

use rustc_hash::FxHashMap;

use crate::core::config::GameSettings;
use crate::core::state::{GameId, GameState};

/// Storage-layer failure.
///
/// Structural faults surface here, never from the rules engine: the engine
/// assumes it is always handed a structurally valid state.
#[derive(Debug)]
pub enum StoreError {
    /// No game with the given id.
    GameNotFound(GameId),
    /// Snapshot bytes could not be encoded or decoded.
    Snapshot(bincode::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::GameNotFound(id) => write!(f, "Game not found: {id}"),
            StoreError::Snapshot(err) => write!(f, "Snapshot codec error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::GameNotFound(_) => None,
            StoreError::Snapshot(err) => Some(err),
        }
    }
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Snapshot(err)
    }
}

/// Games keyed by id.
#[derive(Debug, Default)]
pub struct GameStore {
    games: FxHashMap<GameId, GameState>,
}

impl GameStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a new game, returning its id.
    pub fn create(&mut self, settings: GameSettings) -> GameId {
        let state = GameState::new(settings);
        let id = state.id;
        log::debug!("[store] created game {id}");
        self.games.insert(id, state);
        id
    }

    /// Look up a game by id.
    pub fn get(&self, id: GameId) -> Result<&GameState, StoreError> {
        self.games.get(&id).ok_or(StoreError::GameNotFound(id))
    }

    /// Look up a game by id for mutation.
    pub fn get_mut(&mut self, id: GameId) -> Result<&mut GameState, StoreError> {
        self.games.get_mut(&id).ok_or(StoreError::GameNotFound(id))
    }

    /// Upsert a game, keyed by its own id.
    pub fn save(&mut self, state: GameState) {
        self.games.insert(state.id, state);
    }

    /// Remove a game, returning it.
    pub fn remove(&mut self, id: GameId) -> Result<GameState, StoreError> {
        self.games.remove(&id).ok_or(StoreError::GameNotFound(id))
    }

    /// List stored games, newest first, with pagination.
    #[must_use]
    pub fn list(&self, limit: usize, skip: usize) -> Vec<&GameState> {
        let mut games: Vec<&GameState> = self.games.values().collect();
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        games.into_iter().skip(skip).take(limit).collect()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Encode a full structural snapshot of a game to bytes.
pub fn encode_snapshot(state: &GameState) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a snapshot produced by [`encode_snapshot`].
pub fn decode_snapshot(bytes: &[u8]) -> Result<GameState, StoreError> {
    Ok(bincode::deserialize(bytes)?)
}
