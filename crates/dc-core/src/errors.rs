//! Error types for dungeon construction
//!
//! Only configuration can fail. Queries outside the grid answer with a
//! sentinel (`false`, `Wall`, `None`) instead of an error.

use thiserror::Error;

/// A dungeon configuration that cannot be generated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "grid {width}x{height} is too small: rooms need at least {min_width}x{min_height}"
    )]
    GridTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    #[error("grid {width}x{height} is too large: at most {max_cells} cells")]
    GridTooLarge {
        width: i32,
        height: i32,
        max_cells: i64,
    },

    #[error("room count {max} exceeds the limit of {limit}")]
    TooManyRooms { max: u32, limit: u32 },

    #[error("room count range {min}..={max} is empty")]
    EmptyRoomCountRange { min: u32, max: u32 },

    #[error("room size range {min}..={max} is empty")]
    EmptyRoomSizeRange { min: i32, max: i32 },

    #[error("rooms must be at least one cell wide")]
    ZeroRoomSize,

    #[error("at least one room is needed to place the start position")]
    ZeroRoomCount,
}

/// Errors raised by the core crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("invalid dungeon configuration: {0}")]
    Configuration(#[from] ConfigError),
}

pub type Result<T, E = DungeonError> = std::result::Result<T, E>;
