//! Dungeon system
//!
//! Contains the grid model, rooms, corridors and the level generator.

mod cell;
mod config;
mod corridor;
mod generation;
mod grid;
mod level;
mod room;

pub use cell::CellState;
pub use config::DungeonConfig;
pub use corridor::{
    CorridorTopology, LShape, carve_horizontal, carve_l_corridor, carve_vertical, dig_corridor,
};
pub use generation::generate_rooms_and_corridors;
pub use grid::{Grid, Position};
pub use level::Dungeon;
pub use room::Room;
