//! A generated dungeon: the carved grid plus its start position

use super::{CellState, DungeonConfig, Grid, Position, Room, generate_rooms_and_corridors};
use crate::errors::Result;
use crate::rng::GameRng;

/// A fully carved dungeon.
///
/// The grid is read-only once generation returns. `rooms` records what was
/// carved, in placement order, for display and inspection.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub(super) config: DungeonConfig,
    pub(super) grid: Grid,
    pub(super) start: Position,
    pub(super) rooms: Vec<Room>,
}

impl Dungeon {
    /// Validate `config` and carve a new dungeon from `rng`
    pub fn generate(config: DungeonConfig, rng: &mut GameRng) -> Result<Self> {
        generate_rooms_and_corridors(config, rng)
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Center of the first room carved. Always floor.
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// Rooms in the order they were carved
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn cell_state(&self, x: i32, y: i32) -> CellState {
        self.grid.cell_state(x, y)
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.grid.is_walkable(x, y)
    }

    /// True if every floor cell is reachable from the start position
    pub fn is_connected(&self) -> bool {
        self.grid.reachable_from(self.start) == self.grid.floor_count()
    }
}
