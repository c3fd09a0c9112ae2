//! Rooms: axis-aligned rectangles carved to floor

use super::{CellState, Grid, Position};

/// A carved room. `x`/`y` is the top-left interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the room, rounding toward the top-left
    pub const fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Every cell inside the room, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::new(x, y)))
    }

    /// Overwrite every cell of the room with floor
    pub fn carve(&self, grid: &mut Grid) {
        for pos in self.cells() {
            grid.set(pos.x, pos.y, CellState::Floor);
        }
    }
}
