//! Core game constants

/// Default map dimensions
pub const DEFAULT_WIDTH: i32 = 25;
pub const DEFAULT_HEIGHT: i32 = 25;

/// Rooms carved per level (inclusive)
pub const MIN_ROOMS: u32 = 5;
pub const MAX_ROOMS: u32 = 10;

/// Upper bound accepted for a configured room count
pub const ROOM_COUNT_LIMIT: u32 = 4096;

/// Upper bound accepted for width * height
pub const GRID_CELL_LIMIT: i64 = 1 << 24;

/// Room side lengths (inclusive)
pub const MIN_ROOM_SIZE: i32 = 3;
pub const MAX_ROOM_SIZE: i32 = 6;

/// Solid cells kept on each side of a room: one on the low side from the
/// placement lower bound, one on the high side from the upper bound.
pub const ROOM_MARGIN: i32 = 1;

/// Cells moved per step
pub const AVATAR_SPEED: i32 = 1;

/// Target presentation rate
pub const DEFAULT_FPS: u32 = 60;
