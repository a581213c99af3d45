pub mod action;
pub mod catalog;
pub mod game;
pub mod grid;
pub mod state;

pub use action::BoardAction;
pub use catalog::{
    level, level_label, levels_by_size, Difficulty, Level, Pair, BOARD_SIZES, MIN_GRID_SIZE,
};
pub use game::{
    coverage_percent, level_complete, occupancy_from_paths, pair_connected, Board, BoardSnapshot,
    Dot, DotKind, COVERAGE_COMPLETE, HISTORY_CAP,
};
pub use grid::{cell_key, is_adjacent, is_opposite_parity, key_to_cell, Cell};
pub use state::GameState;
