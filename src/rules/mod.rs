//! The rules engine: move validation, board mutation, termination.

pub mod engine;

pub use engine::{apply_direction, evaluate_winner, place_star, undo_move, MoveError};
