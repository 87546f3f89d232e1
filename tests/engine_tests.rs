//! End-to-end rules engine scenarios.

use star_tracker::{
    apply_direction, evaluate_winner, place_star, Cell, Direction, GamePhase, GameSettings,
    GameState, MoveError, Player, Position,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

/// Default settings, empty board: Player 1 places at (2,2), Player 2
/// selects E. The three cells east of the star become circles, the round
/// advances, and E leaves the direction pool.
#[test]
fn test_standard_opening_scenario() {
    let mut game = GameState::default();

    place_star(&mut game, 2, 2).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();

    assert_eq!(game.board.cell(pos(2, 2)), Cell::Star);
    assert_eq!(game.board.cell(pos(2, 3)), Cell::Circle);
    assert_eq!(game.board.cell(pos(2, 4)), Cell::Circle);
    assert_eq!(game.board.cell(pos(2, 5)), Cell::Circle);
    assert_eq!(game.board.count_empty(), 32);

    assert_eq!(game.round, 2);
    assert_eq!(game.current_player, Player::One);
    assert_eq!(game.phase, GamePhase::Placement);
    assert_eq!(game.available_directions.len(), 7);
    assert!(!game.available_directions.contains(Direction::East));
    assert_eq!(game.winner, None);
}

/// A full place→direction cycle flips the player twice and leaves the
/// phase unchanged net.
#[test]
fn test_full_cycle_returns_to_placement() {
    let mut game = GameState::default();
    let player_before = game.current_player;
    let phase_before = game.phase;

    place_star(&mut game, 0, 0).unwrap();
    assert_eq!(game.current_player, Player::Two);

    apply_direction(&mut game, Direction::South).unwrap();
    assert_eq!(game.current_player, player_before);
    assert_eq!(game.phase, phase_before);
}

#[test]
fn test_rays_project_from_every_star() {
    let mut game = GameState::default();

    place_star(&mut game, 0, 0).unwrap();
    apply_direction(&mut game, Direction::South).unwrap();
    place_star(&mut game, 0, 3).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();

    // Second ray projects east from both stars
    assert_eq!(game.board.cell(pos(0, 1)), Cell::Circle);
    assert_eq!(game.board.cell(pos(0, 2)), Cell::Circle);
    assert_eq!(game.board.cell(pos(0, 4)), Cell::Circle);
    assert_eq!(game.board.cell(pos(0, 5)), Cell::Circle);

    // The first ray's circles are untouched
    for row in 1..6 {
        assert_eq!(game.board.cell(pos(row, 0)), Cell::Circle);
    }
    assert_eq!(game.stars_placed, 2);
    assert_eq!(game.round, 3);
}

#[test]
fn test_reused_direction_is_rejected_without_board_change() {
    let mut game = GameState::default();
    place_star(&mut game, 2, 2).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();
    place_star(&mut game, 4, 4).unwrap();

    let board_before = game.board;
    let err = apply_direction(&mut game, Direction::East).unwrap_err();

    assert_eq!(err, MoveError::DirectionUnavailable(Direction::East));
    assert_eq!(err.to_string(), "Direction E is not available");
    assert_eq!(game.board, board_before);
    assert_eq!(game.available_directions.len(), 7);
}

#[test]
fn test_player_one_wins_when_enough_squares_stay_empty() {
    let settings = GameSettings::default()
        .with_rounds(1)
        .with_empty_squares_to_win(1);
    let mut game = GameState::new(settings);

    place_star(&mut game, 0, 0).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();

    // Round limit exceeded: 30 empty squares >= 1
    assert_eq!(game.round, 2);
    assert_eq!(game.winner, Some(Player::One));
    assert!(game.is_finished());
}

#[test]
fn test_player_two_wins_when_board_fills_up() {
    let settings = GameSettings::default()
        .with_rounds(1)
        .with_empty_squares_to_win(31);
    let mut game = GameState::new(settings);

    place_star(&mut game, 0, 0).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();

    // 30 empty squares < 31
    assert_eq!(game.winner, Some(Player::Two));
}

#[test]
fn test_no_moves_succeed_after_winner_is_set() {
    let settings = GameSettings::default().with_rounds(1);
    let mut game = GameState::new(settings);

    place_star(&mut game, 0, 0).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();
    assert!(game.is_finished());

    assert_eq!(place_star(&mut game, 3, 3), Err(MoveError::GameFinished));

    // Direction moves are rejected on turn order before the winner check
    assert_eq!(
        apply_direction(&mut game, Direction::North),
        Err(MoveError::WrongTurn(Player::Two))
    );
}

/// The winner check is strict: a game with the default 8-round limit is
/// still undecided after exactly 8 completed rounds would exceed the board.
/// With a 2-round limit, the check only fires when `round` reaches 3.
#[test]
fn test_winner_check_is_strictly_after_round_limit() {
    let settings = GameSettings::default().with_rounds(2);
    let mut game = GameState::new(settings);

    place_star(&mut game, 0, 0).unwrap();
    apply_direction(&mut game, Direction::East).unwrap();

    // round == 2 == number_of_rounds: no decision yet
    assert_eq!(game.round, 2);
    assert_eq!(game.winner, None);
    assert_eq!(evaluate_winner(&game), None);

    place_star(&mut game, 3, 3).unwrap();
    apply_direction(&mut game, Direction::West).unwrap();

    assert_eq!(game.round, 3);
    assert!(game.winner.is_some());
}

#[test]
fn test_direction_pool_is_exhaustible() {
    // A full 8-round game that consumes every direction exactly once and
    // ends with a completely filled board.
    let settings = GameSettings::default().with_rounds(9);
    let mut game = GameState::new(settings);

    let moves = [
        ((0, 0), Direction::West),
        ((0, 1), Direction::North),
        ((0, 2), Direction::NorthWest),
        ((0, 3), Direction::NorthEast),
        ((0, 4), Direction::South),
        ((0, 5), Direction::East),
        ((1, 5), Direction::SouthWest),
        ((2, 5), Direction::SouthEast),
    ];
    for ((row, col), direction) in moves {
        place_star(&mut game, row, col).unwrap();
        apply_direction(&mut game, direction).unwrap();
    }

    assert!(game.available_directions.is_empty());
    assert_eq!(game.round, 9);
    assert_eq!(game.board.count_empty(), 0);
    assert_eq!(game.stars_placed, 8);
    assert_eq!(game.winner, None);
}
