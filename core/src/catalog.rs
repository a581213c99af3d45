use std::collections::HashMap;

use crate::grid::{is_opposite_parity, Cell};

pub const MIN_GRID_SIZE: u32 = 2;

pub const BOARD_SIZES: &[u32] = &[5, 6];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Pair {
    pub id: &'static str,
    pub color: &'static str,
    pub start: Cell,
    pub end: Cell,
}

#[derive(Clone, Copy, Debug)]
pub struct Level {
    pub id: &'static str,
    pub size: u32,
    pub difficulty: Difficulty,
    pub pairs: &'static [Pair],
}

const fn cell(row: u32, col: u32) -> Cell {
    Cell { row, col }
}

pub const LEVELS_5: &[Level] = &[
    Level {
        id: "5-1",
        size: 5,
        difficulty: Difficulty::Easy,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(4, 0) },
            Pair { id: "B", color: "#ffeb3b", start: cell(0, 1), end: cell(0, 4) },
            Pair { id: "C", color: "#2196f3", start: cell(4, 1), end: cell(4, 4) },
        ],
    },
    Level {
        id: "5-2",
        size: 5,
        difficulty: Difficulty::Medium,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(4, 4) },
            Pair { id: "B", color: "#2196f3", start: cell(0, 1), end: cell(1, 0) },
            Pair { id: "C", color: "#4caf50", start: cell(0, 4), end: cell(4, 0) },
            Pair { id: "D", color: "#ffeb3b", start: cell(1, 1), end: cell(1, 2) },
        ],
    },
    Level {
        id: "5-3",
        size: 5,
        difficulty: Difficulty::Hard,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(2, 2) },
            Pair { id: "B", color: "#2196f3", start: cell(0, 4), end: cell(4, 4) },
            Pair { id: "C", color: "#4caf50", start: cell(4, 0), end: cell(1, 2) },
            Pair { id: "D", color: "#ffeb3b", start: cell(1, 1), end: cell(2, 0) },
            Pair { id: "E", color: "#9c27b0", start: cell(4, 1), end: cell(4, 3) },
        ],
    },
];

pub const LEVELS_6: &[Level] = &[
    Level {
        id: "6-1",
        size: 6,
        difficulty: Difficulty::Easy,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(5, 0) },
            Pair { id: "B", color: "#ffeb3b", start: cell(0, 1), end: cell(5, 1) },
            Pair { id: "C", color: "#2196f3", start: cell(0, 2), end: cell(5, 2) },
            Pair { id: "D", color: "#4caf50", start: cell(0, 3), end: cell(5, 3) },
        ],
    },
    Level {
        id: "6-2",
        size: 6,
        difficulty: Difficulty::Medium,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(4, 4) },
            Pair { id: "B", color: "#2196f3", start: cell(1, 1), end: cell(5, 5) },
            Pair { id: "C", color: "#ffeb3b", start: cell(0, 5), end: cell(5, 0) },
            Pair { id: "D", color: "#4caf50", start: cell(5, 1), end: cell(1, 5) },
            Pair { id: "E", color: "#9c27b0", start: cell(2, 2), end: cell(3, 3) },
        ],
    },
    Level {
        id: "6-3",
        size: 6,
        difficulty: Difficulty::Hard,
        pairs: &[
            Pair { id: "A", color: "#f44336", start: cell(0, 0), end: cell(3, 3) },
            Pair { id: "B", color: "#2196f3", start: cell(0, 5), end: cell(4, 0) },
            Pair { id: "C", color: "#4caf50", start: cell(5, 5), end: cell(1, 2) },
            Pair { id: "D", color: "#ffeb3b", start: cell(5, 0), end: cell(0, 4) },
            Pair { id: "E", color: "#9c27b0", start: cell(3, 2), end: cell(4, 5) },
        ],
    },
];

pub fn levels_by_size(size: u32) -> &'static [Level] {
    let levels: &'static [Level] = match size {
        5 => LEVELS_5,
        6 => LEVELS_6,
        _ => &[],
    };
    for level in levels {
        validate_level(level);
    }
    levels
}

pub fn level(size: u32, id: Option<&str>) -> Option<&'static Level> {
    let levels = levels_by_size(size);
    match id {
        Some(id) => {
            let trimmed = id.trim();
            levels
                .iter()
                .find(|level| level.id.eq_ignore_ascii_case(trimmed))
        }
        None => levels.first(),
    }
}

pub fn level_label(level: &Level) -> String {
    format!(
        "{} ({}x{}, {}, {} pairs)",
        level.id,
        level.size,
        level.size,
        level.difficulty.label(),
        level.pairs.len()
    )
}

fn validate_level(level: &Level) {
    if level.size < MIN_GRID_SIZE {
        log::warn!(
            "level {}: grid size {} is below the playable minimum of {}",
            level.id,
            level.size,
            MIN_GRID_SIZE
        );
    }
    let mut endpoints: HashMap<Cell, &'static str> = HashMap::new();
    for pair in level.pairs {
        if !is_opposite_parity(pair.start, pair.end) {
            log::warn!(
                "level {} ({}x{}): pair {} starts and ends on the same checkerboard parity, full coverage may be unreachable",
                level.id,
                level.size,
                level.size,
                pair.id
            );
        }
        for endpoint in [pair.start, pair.end] {
            if let Some(owner) = endpoints.insert(endpoint, pair.id) {
                log::warn!(
                    "level {}: pairs {} and {} share endpoint cell {},{}",
                    level.id,
                    owner,
                    pair.id,
                    endpoint.row,
                    endpoint.col
                );
            }
        }
    }
}
