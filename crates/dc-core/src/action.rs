//! Player commands and per-frame movement intents

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step once in a direction
    Move(Direction),
    /// Throw away the current dungeon and carve a new one
    Regenerate,
    Quit,
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }
}

/// Directions held during one frame.
///
/// Each flag is independent: holding left and right together is allowed and
/// means two separate step attempts under sequential movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl FrameIntent {
    /// Mark a direction as held. Diagonals hold both of their axes.
    pub fn hold(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        self.left |= dx < 0;
        self.right |= dx > 0;
        self.up |= dy < 0;
        self.down |= dy > 0;
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }

    /// Single-axis steps in the order they are attempted: left, right, up, down
    pub fn steps(&self) -> impl Iterator<Item = (i32, i32)> {
        [
            (self.left, (-1, 0)),
            (self.right, (1, 0)),
            (self.up, (0, -1)),
            (self.down, (0, 1)),
        ]
        .into_iter()
        .filter_map(|(held, delta)| held.then_some(delta))
    }

    /// Sum of all held directions. Opposite keys cancel.
    pub fn combined_delta(&self) -> (i32, i32) {
        self.steps()
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
