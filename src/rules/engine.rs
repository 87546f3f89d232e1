//! Move validation and application.
//!
//! Every operation validates its preconditions in a fixed order and fails
//! fast: the first violated precondition produces the error, and a failed
//! move leaves the state byte-for-byte untouched (the history push happens
//! only after all checks pass). A successful move fully applies its
//! effects, snapshot included; there is no partial mutation.

use crate::core::board::{Cell, Position};
use crate::core::direction::Direction;
use crate::core::player::Player;
use crate::core::state::{GamePhase, GameState};

/// A rejected move.
///
/// These are expected, frequent outcomes, not faults: they are reported as
/// values and never panic. `Display` gives the client-facing reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The move belongs to the other player.
    WrongTurn(Player),
    /// The move is not legal in the current phase.
    WrongPhase(GamePhase),
    /// A winner has already been determined.
    GameFinished,
    /// The coordinates fall outside the board.
    InvalidPosition { row: usize, col: usize },
    /// The target cell already holds a star or circle.
    Occupied { row: usize, col: usize },
    /// The direction was already used this game.
    DirectionUnavailable(Direction),
    /// Undo was requested with an empty history.
    NothingToUndo,
    /// Undo was requested after the game finished.
    CannotUndoFinished,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::WrongTurn(expected) => write!(f, "Not {expected}'s turn"),
            MoveError::WrongPhase(expected) => write!(f, "Not in {expected} phase"),
            MoveError::GameFinished => f.write_str("Game is already finished"),
            MoveError::InvalidPosition { row, col } => {
                write!(f, "Invalid position ({row}, {col})")
            }
            MoveError::Occupied { row, col } => {
                write!(f, "Position ({row}, {col}) is not empty")
            }
            MoveError::DirectionUnavailable(direction) => {
                write!(f, "Direction {direction} is not available")
            }
            MoveError::NothingToUndo => f.write_str("No moves to undo"),
            MoveError::CannotUndoFinished => {
                f.write_str("Cannot undo after the game is finished")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Place a star at `(row, col)`.
///
/// Preconditions, checked in order: Player 1 to move, placement phase,
/// game not finished, position on the board, cell empty.
///
/// On success: pushes a pre-move snapshot, sets the star, hands the turn
/// to Player 2 in the direction phase, and increments `stars_placed`.
/// No winner evaluation happens on placement.
pub fn place_star(state: &mut GameState, row: usize, col: usize) -> Result<(), MoveError> {
    if state.current_player != Player::One {
        return Err(MoveError::WrongTurn(Player::One));
    }
    if state.phase != GamePhase::Placement {
        return Err(MoveError::WrongPhase(GamePhase::Placement));
    }
    if state.is_finished() {
        return Err(MoveError::GameFinished);
    }
    let pos = Position::new(row, col).ok_or(MoveError::InvalidPosition { row, col })?;
    if !state.board.cell(pos).is_empty() {
        return Err(MoveError::Occupied { row, col });
    }

    state.push_history(format!("Star placed at ({row}, {col})"));

    state.board.set(pos, Cell::Star);
    state.current_player = Player::Two;
    state.phase = GamePhase::Direction;
    state.stars_placed += 1;
    state.touch();

    log::debug!("[game {}] star placed at {pos} in round {}", state.id, state.round);
    Ok(())
}

/// Project rays from every star in `direction`.
///
/// Preconditions, checked in order: Player 2 to move, direction phase,
/// game not finished, direction still in the pool. (Unrecognized compass
/// labels are rejected upstream when parsing into [`Direction`].)
///
/// On success: pushes a pre-move snapshot, walks outward from every star
/// in row-major order converting empty cells to circles until the board
/// edge, consumes the direction, hands the turn back to Player 1 in the
/// placement phase, increments the round, and then evaluates termination.
pub fn apply_direction(state: &mut GameState, direction: Direction) -> Result<(), MoveError> {
    if state.current_player != Player::Two {
        return Err(MoveError::WrongTurn(Player::Two));
    }
    if state.phase != GamePhase::Direction {
        return Err(MoveError::WrongPhase(GamePhase::Direction));
    }
    if state.is_finished() {
        return Err(MoveError::GameFinished);
    }
    if !state.available_directions.contains(direction) {
        return Err(MoveError::DirectionUnavailable(direction));
    }

    state.push_history(format!("Direction selected: {direction}"));

    // Scan order does not affect the result: rays only write to empty
    // cells, so writes from different stars never conflict.
    let stars: Vec<Position> = state.board.stars().collect();
    let mut filled = 0;
    for star in stars {
        let count = state.board.fill_ray(star, direction);
        log::trace!("[game {}] ray {direction} from {star} filled {count} cells", state.id);
        filled += count;
    }

    state.available_directions.remove(direction);
    state.current_player = Player::One;
    state.phase = GamePhase::Placement;
    state.round += 1;
    state.touch();

    log::debug!(
        "[game {}] direction {direction} filled {filled} cells, entering round {}",
        state.id,
        state.round
    );

    if let Some(winner) = evaluate_winner(state) {
        state.winner = Some(winner);
        log::info!(
            "[game {}] {winner} wins with {} empty squares left",
            state.id,
            state.board.count_empty()
        );
    }

    Ok(())
}

/// Evaluate termination. Pure; meaningful only after a completed direction
/// move.
///
/// Once `round` strictly exceeds the configured round limit, Player 1 wins
/// if the number of empty cells is at least `empty_squares_to_win`,
/// otherwise Player 2 wins. Before that, no decision.
#[must_use]
pub fn evaluate_winner(state: &GameState) -> Option<Player> {
    if state.round <= state.settings.number_of_rounds {
        return None;
    }
    if state.board.count_empty() >= state.settings.empty_squares_to_win {
        Some(Player::One)
    } else {
        Some(Player::Two)
    }
}

/// Undo the most recent move.
///
/// Rejected when the history is empty or the game has finished. Otherwise
/// pops the latest snapshot and restores every captured field verbatim;
/// exactly one undo reverses exactly one placement or direction move.
pub fn undo_move(state: &mut GameState) -> Result<(), MoveError> {
    if state.history.is_empty() {
        return Err(MoveError::NothingToUndo);
    }
    if state.is_finished() {
        return Err(MoveError::CannotUndoFinished);
    }

    let Some(entry) = state.pop_history() else {
        return Err(MoveError::NothingToUndo);
    };
    entry.restore(state);
    state.touch();

    log::debug!("[game {}] undid move: {}", state.id, entry.action);
    Ok(())
}
