use std::collections::{HashMap, HashSet, VecDeque};

use crate::action::BoardAction;
use crate::catalog::{Level, Pair};
use crate::grid::{cell_key, is_adjacent};
use crate::state::GameState;

pub const HISTORY_CAP: usize = 20;
pub const COVERAGE_COMPLETE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotKind {
    Start,
    End,
}

#[derive(Clone, Copy, Debug)]
pub struct Dot {
    pub pair: &'static Pair,
    pub kind: DotKind,
}

#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    pub paths: HashMap<String, Vec<String>>,
    pub occupancy: HashMap<String, String>,
    pub moves: u32,
    pub coverage: u32,
    pub completed: HashSet<String>,
    pub complete: bool,
}

pub fn occupancy_from_paths(paths: &HashMap<String, Vec<String>>) -> HashMap<&str, &str> {
    let mut occupancy = HashMap::new();
    for (pair_id, path) in paths {
        for key in path {
            occupancy.insert(key.as_str(), pair_id.as_str());
        }
    }
    occupancy
}

pub fn coverage_percent(occupied: usize, size: u32) -> u32 {
    let total = (size * size).max(1);
    ((occupied as f32 / total as f32) * 100.0).round() as u32
}

pub fn pair_connected(path: &[String], pair: &Pair) -> bool {
    let start = cell_key(pair.start.row, pair.start.col);
    let end = cell_key(pair.end.row, pair.end.col);
    path.iter().any(|key| *key == start) && path.iter().any(|key| *key == end)
}

pub fn level_complete(level: &Level, paths: &HashMap<String, Vec<String>>) -> bool {
    let all_connected = level.pairs.iter().all(|pair| {
        let path = paths.get(pair.id).map(Vec::as_slice).unwrap_or(&[]);
        pair_connected(path, pair)
    });
    all_connected
        && coverage_percent(occupancy_from_paths(paths).len(), level.size) == COVERAGE_COMPLETE
}

pub struct Board {
    level: Level,
    state: GameState,
    history: VecDeque<GameState>,
    active_pair: Option<String>,
    dots: HashMap<String, Dot>,
}

impl Board {
    pub fn new(level: Level) -> Self {
        let mut dots = HashMap::new();
        for pair in level.pairs {
            let start = cell_key(pair.start.row, pair.start.col);
            let end = cell_key(pair.end.row, pair.end.col);
            dots.insert(start, Dot { pair, kind: DotKind::Start });
            dots.insert(end, Dot { pair, kind: DotKind::End });
        }
        Self {
            level,
            state: GameState::new(),
            history: VecDeque::new(),
            active_pair: None,
            dots,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn moves(&self) -> u32 {
        self.state.moves
    }

    pub fn active_pair(&self) -> Option<&str> {
        self.active_pair.as_deref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn dot_at(&self, key: &str) -> Option<&Dot> {
        self.dots.get(key)
    }

    pub fn path(&self, pair_id: &str) -> &[String] {
        self.state
            .paths
            .get(pair_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn occupancy(&self) -> HashMap<&str, &str> {
        occupancy_from_paths(&self.state.paths)
    }

    pub fn coverage(&self) -> u32 {
        coverage_percent(self.occupancy().len(), self.level.size)
    }

    pub fn completed_pairs(&self) -> HashSet<&'static str> {
        self.level
            .pairs
            .iter()
            .filter(|pair| pair_connected(self.path(pair.id), pair))
            .map(|pair| pair.id)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        level_complete(&self.level, &self.state.paths)
    }

    pub fn cell_down(&mut self, key: &str) {
        if self.is_complete() {
            return;
        }
        let dot_pair = self.dots.get(key).map(|dot| dot.pair.id);
        if let Some(pair_id) = dot_pair {
            self.push_history();
            self.state
                .paths
                .insert(pair_id.to_string(), vec![key.to_string()]);
            self.state.moves += 1;
            self.active_pair = Some(pair_id.to_string());
            return;
        }
        let Some(owner) = self.occupancy().get(key).map(|id| id.to_string()) else {
            return;
        };
        self.push_history();
        if let Some(path) = self.state.paths.get_mut(&owner) {
            if let Some(index) = path.iter().position(|cell| cell == key) {
                path.truncate(index + 1);
            }
        }
        self.state.moves += 1;
        self.active_pair = Some(owner);
    }

    pub fn cell_enter(&mut self, key: &str) {
        if self.is_complete() {
            return;
        }
        let Some(pair_id) = self.active_pair.clone() else {
            return;
        };
        let path = self.path(&pair_id);
        let Some(last) = path.last() else {
            return;
        };
        if last.as_str() == key {
            return;
        }
        if !is_adjacent(last, key) {
            return;
        }
        if let Some(dot) = self.dots.get(key) {
            if dot.pair.id != pair_id {
                return;
            }
        }
        if let Some(index) = path.iter().position(|cell| cell == key) {
            self.push_history();
            if let Some(path) = self.state.paths.get_mut(&pair_id) {
                path.truncate(index + 1);
            }
            return;
        }
        if self.occupancy().contains_key(key) {
            return;
        }
        let connected = self
            .find_pair(&pair_id)
            .map(|pair| pair_connected(path, pair))
            .unwrap_or(false);
        if connected {
            return;
        }
        self.push_history();
        if let Some(path) = self.state.paths.get_mut(&pair_id) {
            path.push(key.to_string());
        }
    }

    pub fn gesture_end(&mut self) {
        self.active_pair = None;
    }

    pub fn undo(&mut self) {
        if let Some(previous) = self.history.pop_back() {
            self.state = previous;
        }
    }

    pub fn clear(&mut self) {
        self.state = GameState::new();
        self.history.clear();
    }

    pub fn apply_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::CellDown { key } => self.cell_down(&key),
            BoardAction::CellEnter { key } => self.cell_enter(&key),
            BoardAction::GestureEnd => self.gesture_end(),
            BoardAction::Undo => self.undo(),
            BoardAction::Clear => self.clear(),
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let occupancy = self
            .occupancy()
            .iter()
            .map(|(key, pair_id)| (key.to_string(), pair_id.to_string()))
            .collect();
        let completed = self
            .completed_pairs()
            .iter()
            .map(|pair_id| pair_id.to_string())
            .collect();
        BoardSnapshot {
            paths: self.state.paths.clone(),
            occupancy,
            moves: self.state.moves,
            coverage: self.coverage(),
            completed,
            complete: self.is_complete(),
        }
    }

    fn find_pair(&self, pair_id: &str) -> Option<&'static Pair> {
        self.level.pairs.iter().find(|pair| pair.id == pair_id)
    }

    // history holds pre-mutation snapshots, oldest first
    fn push_history(&mut self) {
        if self.history.len() >= HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(self.state.clone());
    }
}
