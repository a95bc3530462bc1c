//! Tests for the game engine's public contract.

use noughts_core::{Board, Cell, GameEngine, GameStatus, Line, MoveError, Player, Position};

fn play(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in moves {
        engine.select_cell(index).expect("Valid move");
    }
    engine
}

#[test]
fn test_turns_alternate() {
    let mut engine = GameEngine::new();
    let order = [4, 0, 8, 2, 1, 7, 3, 5];
    for (n, index) in order.into_iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(engine.to_move(), expected);
        let outcome = engine.select_cell(index).expect("Valid move");
        assert_eq!(outcome.player, expected);
        assert_eq!(engine.cell(index), Some(Cell::Occupied(expected)));
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = play(&[4]);
    let before = engine.clone();

    let result = engine.select_cell(4);

    assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(engine, before);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_moves_after_end_rejected() {
    let mut engine = play(&[0, 1, 3, 4, 6]);
    let before = engine.clone();

    for index in 0..9 {
        assert_eq!(engine.select_cell(index), Err(MoveError::GameAlreadyEnded));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_column_win() {
    let mut engine = play(&[0, 1, 3, 4]);

    let outcome = engine.select_cell(6).expect("Valid move");

    let line = engine.winning_line().expect("Winning line");
    assert_eq!(line.indices(), [0, 3, 6]);
    assert_eq!(
        outcome.status,
        GameStatus::Won {
            winner: Player::X,
            line
        }
    );
    assert!(outcome.ended_game());
}

#[test]
fn test_nought_win() {
    // O takes the right column.
    let engine = play(&[0, 2, 1, 5, 4, 8]);
    assert_eq!(engine.status().winner(), Some(Player::O));
    assert_eq!(engine.winning_line().map(Line::indices), Some([2, 5, 8]));
}

#[test]
fn test_full_board_draw() {
    // Ends as O X O / X X O / X O X.
    let mut engine = play(&[1, 0, 3, 2, 4, 5, 6, 7]);
    assert_eq!(engine.status(), GameStatus::InProgress);

    let outcome = engine.select_cell(8).expect("Valid move");

    assert_eq!(outcome.status, GameStatus::Draw);
    assert!(engine.board().is_full());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_winning_on_last_cell_is_a_win() {
    // X completes the bottom row with the ninth mark.
    let engine = play(&[6, 0, 7, 1, 3, 4, 2, 5, 8]);
    assert!(engine.board().is_full());
    assert_eq!(engine.status().winner(), Some(Player::X));
}

#[test]
fn test_double_line_reports_first_line() {
    // X's centre move completes both the middle row and the main diagonal.
    let mut engine = play(&[0, 1, 3, 2, 5, 6, 8, 7]);

    let outcome = engine.select_cell(4).expect("Valid move");

    let row = Line::ALL[1];
    assert_eq!(row.indices(), [3, 4, 5]);
    assert_eq!(
        outcome.status,
        GameStatus::Won {
            winner: Player::X,
            line: row
        }
    );
}

#[test]
fn test_reset_restores_start() {
    let mut engine = play(&[0, 1, 3, 4, 6]);

    engine.reset();

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = play(&[4, 0]);
    once.reset();

    let mut twice = play(&[4, 0]);
    twice.reset();
    twice.reset();

    assert_eq!(once, twice);
}

#[test]
fn test_play_resumes_after_reset() {
    let mut engine = play(&[0, 1, 3, 4, 6]);
    engine.reset();

    let outcome = engine.select(Position::TopLeft).expect("Valid move");
    assert_eq!(outcome.player, Player::X);
}

#[test]
fn test_independent_engines() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();

    first.select_cell(4).expect("Valid move");

    assert_eq!(first.cell(4), Some(Cell::Occupied(Player::X)));
    assert_eq!(second.cell(4), Some(Cell::Empty));
}

#[test]
fn test_snapshot_serializes_status() {
    let engine = play(&[0, 1, 3, 4, 6]);

    let json = serde_json::to_value(engine.snapshot()).expect("Serializable");

    assert_eq!(json["to_move"], "X");
    assert_eq!(json["status"]["Won"]["winner"], "X");
    assert_eq!(
        json["status"]["Won"]["line"],
        serde_json::json!(["TopLeft", "MiddleLeft", "BottomLeft"])
    );
    assert_eq!(json["cells"][0]["Occupied"], "X");
    assert_eq!(json["cells"][2], "Empty");
}
