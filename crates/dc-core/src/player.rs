//! The player's avatar

use log::trace;

use crate::consts::AVATAR_SPEED;
use crate::dungeon::{Grid, Position};

/// The avatar: a position on the grid and a fixed step length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pos: Position,
    speed: i32,
}

impl Avatar {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            speed: AVATAR_SPEED,
        }
    }

    /// Current cell. Only [`Avatar::try_move`] changes it, so it is always
    /// a cell the avatar could walk onto.
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Where a step of (dx, dy) would land. Each delta is clamped to a unit step.
    pub fn target(&self, dx: i32, dy: i32) -> Position {
        self.pos
            .offset(dx.signum() * self.speed, dy.signum() * self.speed)
    }

    /// Step by (dx, dy) if the target cell is walkable.
    ///
    /// Moving into a wall or off the map leaves the avatar where it is and
    /// returns `false`.
    pub fn try_move(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        let target = self.target(dx, dy);
        if grid.is_walkable_at(target) {
            self.pos = target;
            true
        } else {
            trace!("blocked: {} -> {}", self.pos, target);
            false
        }
    }
}
