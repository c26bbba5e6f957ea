//! Tests for the extreme tic-tac-toe engine.

use std::collections::HashSet;
use strictly_extreme::invariants::{
    InvariantSet, MarksTrackedInvariant, QueueCapacityInvariant, QueueMatchesBoardInvariant,
};
use strictly_extreme::{
    Board, GameEngine, GameStatus, MoveError, Player, Position, Square, MAX_LIVE_MARKS,
};

type AllInvariants = (
    QueueCapacityInvariant,
    QueueMatchesBoardInvariant,
    MarksTrackedInvariant,
);

/// Everything observable about an engine, for before/after comparisons.
#[derive(Debug, PartialEq, Eq, Hash)]
struct Snapshot {
    board: Board,
    queue_x: Vec<Position>,
    queue_o: Vec<Position>,
    to_move: Player,
    status: GameStatus,
}

fn snapshot(engine: &GameEngine) -> Snapshot {
    Snapshot {
        board: engine.board().clone(),
        queue_x: engine.queue(Player::X).iter().collect(),
        queue_o: engine.queue(Player::O).iter().collect(),
        to_move: engine.current_player(),
        status: engine.status(),
    }
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index).expect("Valid move");
    }
}

/// Counters gathered while walking the reachable states.
#[derive(Debug, Default)]
struct Walk {
    states: usize,
    accepted: usize,
    evictions: usize,
    wins: usize,
}

/// Visits every state reachable from a fresh engine, trying every index
/// (including off-board ones) in each. States are deduplicated by snapshot,
/// so arbitrarily long games are covered.
fn walk_all_states() -> Walk {
    let mut walk = Walk::default();
    let mut seen = HashSet::new();
    let start = GameEngine::new();
    seen.insert(snapshot(&start));
    let mut pending = vec![start];

    while let Some(engine) = pending.pop() {
        walk.states += 1;
        let before = snapshot(&engine);
        let mut any_accepted = false;

        for index in (0..=9).chain([42, usize::MAX]) {
            let mut next = engine.clone();
            let outcome = match next.apply_move(index) {
                Err(_) => {
                    assert_eq!(snapshot(&next), before, "Rejected move {} changed state", index);
                    continue;
                }
                Ok(outcome) => outcome,
            };
            any_accepted = true;
            walk.accepted += 1;
            if outcome.evicted.is_some() {
                walk.evictions += 1;
            }

            assert!(
                AllInvariants::check_all(&next).is_ok(),
                "Invariants broken after {:?}",
                outcome.action
            );
            for player in [Player::X, Player::O] {
                assert!(next.queue(player).len() <= MAX_LIVE_MARKS);
            }

            match next.status() {
                GameStatus::InProgress => {
                    assert_eq!(next.winning_line(), None);
                    assert_eq!(next.current_player(), before.to_move.opponent());
                    assert!(outcome.reset.is_none());
                    if seen.insert(snapshot(&next)) {
                        pending.push(next);
                    }
                }
                GameStatus::Won(winner) => {
                    walk.wins += 1;
                    assert_eq!(winner, before.to_move);
                    assert!(next.winning_line().is_some());
                    assert!(outcome.reset.is_some());
                    assert_eq!(next.apply_move(index), Err(MoveError::GameOver));
                }
            }
        }

        // A game in progress always has an open cell: there is no draw.
        assert!(any_accepted, "Stuck in progress: {:?}", before);
    }

    walk
}

#[test]
fn test_every_reachable_state_keeps_invariants() {
    let walk = walk_all_states();
    assert!(walk.states > 10_000);
    assert!(walk.accepted > walk.states);
    assert!(walk.evictions > 0);
    assert!(walk.wins > 0);
}

#[test]
fn test_long_game_without_a_line_stays_in_progress() {
    let mut engine = GameEngine::new();
    // Two full laps of both queues; no line is ever completed.
    // X: 0, 1, 5, 6, 2   O: 3, 4, 8, 7, 0
    let mut evictions = 0;
    for index in [0, 3, 1, 4, 5, 8, 6, 7, 2, 0] {
        let outcome = engine.apply_move(index).unwrap();
        if outcome.evicted.is_some() {
            evictions += 1;
        }
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
    assert_eq!(evictions, 4);
}

#[test]
fn test_column_win_then_game_over_until_reset() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4]);

    let outcome = engine.apply_move(6).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Player::X));
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(outcome.message, "X wins! Resetting...");
    assert!(outcome.reset.is_some());

    for index in [2, 5, 7, 8, 0, 9] {
        assert_eq!(engine.apply_move(index), Err(MoveError::GameOver));
    }

    engine.reset();
    assert!(engine.apply_move(2).is_ok());
}

#[test]
fn test_fourth_mark_evicts_oldest_and_breaks_row() {
    let mut engine = GameEngine::new();
    // X: 0, 1   O: 4, 8
    play(&mut engine, &[0, 4, 1, 8]);
    // X takes 3 (not 2), O blocks elsewhere.
    play(&mut engine, &[3, 5]);
    // X's fourth mark at 2 evicts 0: row (0,1,2) is not complete.
    let outcome = engine.apply_move(2).unwrap();

    assert_eq!(outcome.evicted, Some(Position::TopLeft));
    assert_eq!(engine.board().get(Position::TopLeft), Square::Empty);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(
        engine.queue(Player::X).iter().collect::<Vec<_>>(),
        vec![Position::TopCenter, Position::MiddleLeft, Position::TopRight]
    );
}

#[test]
fn test_completing_line_with_evicted_mark_does_not_win() {
    let mut engine = GameEngine::new();
    // X: 0, 1, 6   O: 3, 4, 8 (O's 3,4 leave 5 open for later)
    play(&mut engine, &[0, 3, 1, 4, 6, 8]);
    assert_eq!(engine.status(), GameStatus::InProgress);

    // X plays 2: (0,1,2) would be complete, but 0 is X's oldest and vanishes.
    let outcome = engine.apply_move(2).unwrap();
    assert_eq!(outcome.evicted, Some(Position::TopLeft));
    assert_eq!(outcome.status, GameStatus::InProgress);
    assert!(outcome.reset.is_none());
}

#[test]
fn test_occupied_and_out_of_bounds_leave_state_alone() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);
    let before = snapshot(&engine);

    assert_eq!(
        engine.apply_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(
        engine.apply_move(0),
        Err(MoveError::CellOccupied(Position::TopLeft))
    );
    assert_eq!(engine.apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn test_nine_moves_without_a_line_stays_in_progress() {
    let mut engine = GameEngine::new();
    // X: 0, 1, 5, 6, 2   O: 3, 4, 8, 7
    for index in [0, 3, 1, 4, 5, 8, 6, 7, 2] {
        engine.apply_move(index).unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}

#[test]
fn test_reset_after_win_restores_start() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 3, 4, 6]);
    engine.reset();

    assert_eq!(engine.board(), &Board::new());
    assert!(engine.queue(Player::X).is_empty());
    assert!(engine.queue(Player::O).is_empty());
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.status_text(), "X's turn to go!");
}

#[test]
fn test_o_can_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 2, 8]);
    let outcome = engine.apply_move(6).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Player::O));
    assert_eq!(outcome.message, "O wins! Resetting...");
    assert_eq!(
        engine.winning_line(),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::GameOver.to_string(), "Game is over, waiting for reset");
    assert_eq!(
        MoveError::OutOfBounds(12).to_string(),
        "Cell index 12 is off the board (must be 0-8)"
    );
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Center is already occupied"
    );
}
