#[derive(Clone, Debug)]
pub enum BoardAction {
    CellDown { key: String },
    CellEnter { key: String },
    GestureEnd,
    Undo,
    Clear,
}
