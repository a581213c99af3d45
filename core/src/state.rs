use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub paths: HashMap<String, Vec<String>>,
    pub moves: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}
