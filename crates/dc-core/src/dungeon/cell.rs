//! Map cell states

/// State of a single grid cell. Fresh grids are all wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Floor,
    #[default]
    Wall,
}

impl CellState {
    /// Check if this cell can be stood on
    pub const fn is_walkable(&self) -> bool {
        matches!(self, CellState::Floor)
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Floor => '.',
            CellState::Wall => '#',
        }
    }
}
