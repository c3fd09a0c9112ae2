//! Corridor carving
//!
//! Corridors are L-shaped: one straight leg along each axis, meeting at a
//! single corner. Both legs are carved over their full inclusive span, so a
//! corridor always links its two endpoints no matter what it crosses.

use log::trace;
use strum::{Display, EnumString};

use crate::rng::GameRng;

use super::{CellState, Grid, Position, Room};

/// Which leg of an L-shaped corridor is carved first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LShape {
    /// Along the start row, then along the end column
    HorizontalFirst,
    /// Along the start column, then along the end row
    VerticalFirst,
}

/// Which point each new room's corridor runs from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CorridorTopology {
    /// Every room links back to the start position (first room's center)
    #[default]
    Star,
    /// Every room links to the previous room's center
    Chain,
}

impl CorridorTopology {
    /// Anchor for the corridor to `rooms[index]`, given the rooms placed so far
    pub fn anchor(&self, start: Position, rooms: &[Room], index: usize) -> Position {
        match self {
            CorridorTopology::Star => start,
            CorridorTopology::Chain => index
                .checked_sub(1)
                .and_then(|prev| rooms.get(prev))
                .map_or(start, Room::center),
        }
    }
}

/// Carve a horizontal run on row `y` covering `x1..=x2` in either order
pub fn carve_horizontal(grid: &mut Grid, y: i32, x1: i32, x2: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(x, y, CellState::Floor);
    }
}

/// Carve a vertical run on column `x` covering `y1..=y2` in either order
pub fn carve_vertical(grid: &mut Grid, x: i32, y1: i32, y2: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(x, y, CellState::Floor);
    }
}

/// Carve an L-shaped corridor with a fixed orientation
pub fn carve_l_corridor(grid: &mut Grid, from: Position, to: Position, shape: LShape) {
    match shape {
        LShape::HorizontalFirst => {
            carve_horizontal(grid, from.y, from.x, to.x);
            carve_vertical(grid, to.x, from.y, to.y);
        }
        LShape::VerticalFirst => {
            carve_vertical(grid, from.x, from.y, to.y);
            carve_horizontal(grid, to.y, from.x, to.x);
        }
    }
}

/// Carve an L-shaped corridor, picking the orientation with a fair coin.
///
/// Returns the orientation used.
pub fn dig_corridor(grid: &mut Grid, from: Position, to: Position, rng: &mut GameRng) -> LShape {
    let shape = if rng.one_in(2) {
        LShape::HorizontalFirst
    } else {
        LShape::VerticalFirst
    };
    trace!("corridor {from} -> {to} ({shape})");
    carve_l_corridor(grid, from, to, shape);
    shape
}
