//! Core state model: board, directions, players, settings, history.
//!
//! These types carry no rules of their own beyond structural invariants;
//! move validation and application live in [`crate::rules`].

pub mod board;
pub mod config;
pub mod direction;
pub mod history;
pub mod player;
pub mod state;

pub use board::{Board, Cell, Position, BOARD_SIZE};
pub use config::GameSettings;
pub use direction::{Direction, DirectionSet, ParseDirectionError};
pub use history::HistoryEntry;
pub use player::Player;
pub use state::{GameId, GamePhase, GameState};
