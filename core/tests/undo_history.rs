use nagare_core::catalog::{Difficulty, Level, Pair};
use nagare_core::game::{Board, HISTORY_CAP};
use nagare_core::grid::{cell_key, Cell};
use nagare_core::state::GameState;

const fn cell(row: u32, col: u32) -> Cell {
    Cell { row, col }
}

static LEVEL: Level = Level {
    id: "test-5",
    size: 5,
    difficulty: Difficulty::Easy,
    pairs: &[
        Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(4, 0) },
        Pair { id: "B", color: "#2196f3", start: cell(0, 4), end: cell(4, 4) },
    ],
};

fn down(board: &mut Board, row: u32, col: u32) {
    board.cell_down(&cell_key(row, col));
}

fn enter(board: &mut Board, row: u32, col: u32) {
    board.cell_enter(&cell_key(row, col));
}

#[test]
fn undo_restores_the_state_before_the_last_mutation() {
    let mut board = Board::new(LEVEL);
    down(&mut board, 0, 0);
    board.undo();
    assert_eq!(board.state(), &GameState::new());
}

#[test]
fn undo_steps_back_through_a_drag_one_mutation_at_a_time() {
    let mut board = Board::new(LEVEL);
    down(&mut board, 0, 0);
    enter(&mut board, 1, 0);
    enter(&mut board, 2, 0);

    board.undo();
    assert_eq!(board.path("A"), [cell_key(0, 0), cell_key(1, 0)]);
    assert_eq!(board.moves(), 1);

    board.undo();
    assert_eq!(board.path("A"), [cell_key(0, 0)]);
    assert_eq!(board.moves(), 1);

    board.undo();
    assert!(board.state().paths.is_empty());
    assert_eq!(board.moves(), 0);
}

#[test]
fn undo_restores_the_move_counter_verbatim() {
    let mut board = Board::new(LEVEL);
    down(&mut board, 0, 0);
    enter(&mut board, 1, 0);
    enter(&mut board, 2, 0);
    board.gesture_end();
    down(&mut board, 1, 0);
    assert_eq!(board.moves(), 2);
    assert_eq!(board.path("A").len(), 2);

    board.undo();
    assert_eq!(board.moves(), 1);
    assert_eq!(board.path("A").len(), 3);
}

#[test]
fn undo_on_an_empty_stack_is_a_noop() {
    let mut board = Board::new(LEVEL);
    board.undo();
    assert_eq!(board.state(), &GameState::new());

    down(&mut board, 0, 0);
    board.undo();
    board.undo();
    assert_eq!(board.state(), &GameState::new());
}

#[test]
fn history_keeps_only_the_newest_twenty_snapshots() {
    let mut board = Board::new(LEVEL);
    for _ in 0..25 {
        down(&mut board, 0, 0);
    }
    assert_eq!(board.moves(), 25);
    assert_eq!(board.history_len(), HISTORY_CAP);

    for _ in 0..HISTORY_CAP {
        board.undo();
    }
    assert_eq!(board.moves(), 5);
    assert_eq!(board.path("A"), [cell_key(0, 0)]);

    board.undo();
    assert_eq!(board.moves(), 5);
}

#[test]
fn clear_resets_state_and_wipes_history() {
    let mut board = Board::new(LEVEL);
    down(&mut board, 0, 0);
    enter(&mut board, 1, 0);
    board.clear();
    assert_eq!(board.state(), &GameState::new());
    assert_eq!(board.history_len(), 0);

    board.undo();
    assert_eq!(board.state(), &GameState::new());
}

#[test]
fn undo_leaves_the_active_gesture_marker_alone() {
    let mut board = Board::new(LEVEL);
    down(&mut board, 0, 0);
    board.undo();
    assert_eq!(board.active_pair(), Some("A"));
    // the marker survives, but the empty path blocks any continuation
    enter(&mut board, 1, 0);
    assert!(board.state().paths.is_empty());
}
