//! # star-tracker
//!
//! Rules engine for *Star Tracker*, a two-player abstract game on a fixed
//! 6×6 grid. Player 1 places star markers; Player 2 projects rays from all
//! placed stars in a chosen compass direction, filling empty cells with
//! circles. When the configured round limit is exceeded, the winner is
//! decided by counting the cells still empty.
//!
//! ## Design Principles
//!
//! 1. **Value-oriented**: a game is one [`GameState`] value. Operations
//!    either fully apply their effects (history snapshot included) or
//!    leave the state untouched; there is no partial mutation.
//!
//! 2. **Rejections are values**: wrong turn, wrong phase, occupied cell
//!    and friends come back as [`MoveError`], never as panics. Structural
//!    faults (unknown id, bad snapshot bytes) belong to the store layer.
//!
//! 3. **Undo by snapshot**: every mutating move pushes a deep pre-move
//!    snapshot; undo pops one and restores it verbatim.
//!
//! ## Modules
//!
//! - `core`: board, directions, players, settings, state, history
//! - `rules`: move validation and application, termination evaluation
//! - `store`: in-memory keyed storage and snapshot codec
//!
//! ## Example
//!
//! ```
//! use star_tracker::{apply_direction, place_star, Direction, GameState};
//!
//! let mut game = GameState::default();
//! place_star(&mut game, 2, 2).unwrap();
//! apply_direction(&mut game, Direction::East).unwrap();
//!
//! assert_eq!(game.round, 2);
//! assert_eq!(game.available_directions.len(), 7);
//! ```

pub mod core;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, DirectionSet, GameId, GamePhase, GameSettings, GameState,
    HistoryEntry, ParseDirectionError, Player, Position, BOARD_SIZE,
};

pub use crate::rules::{apply_direction, evaluate_winner, place_star, undo_move, MoveError};

pub use crate::store::{decode_snapshot, encode_snapshot, GameStore, StoreError};
