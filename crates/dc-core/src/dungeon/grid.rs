//! Grid model: a fixed-size rectangle of cell states

use std::fmt;

use super::CellState;

/// An integer map coordinate. Signed so callers can ask about positions left
/// of or above the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy)
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Row-major grid of cell states.
///
/// Dimensions never change after construction. Every query is bounds-checked:
/// anything outside `[0, width) x [0, height)` is solid and not walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid filled with walls. Negative dimensions are treated as 0.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![CellState::Wall; (width as usize) * (height as usize)],
        }
    }

    /// Build a grid from text rows: `.` is floor, anything else is wall.
    ///
    /// Rows shorter than the first are padded with wall.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                if ch == CellState::Floor.symbol() {
                    grid.set(x as i32, y as i32, CellState::Floor);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a coordinate lies on the grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + x as usize)
        } else {
            None
        }
    }

    /// Cell state, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell state. Coordinates outside the grid read as wall.
    pub fn cell_state(&self, x: i32, y: i32) -> CellState {
        self.get(x, y).unwrap_or(CellState::Wall)
    }

    /// True iff (x, y) is on the grid and is floor
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c.is_walkable())
    }

    /// Same as [`Grid::is_walkable`] for a [`Position`]
    pub fn is_walkable_at(&self, pos: Position) -> bool {
        self.is_walkable(pos.x, pos.y)
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = state;
        }
    }

    /// Number of floor cells
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // chunks(0) panics; an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Count floor cells 4-connected to `start`. Zero if `start` is not walkable.
    pub fn reachable_from(&self, start: Position) -> usize {
        if !self.is_walkable_at(start) {
            return 0;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![start];
        let mut count = 0;

        while let Some(pos) = stack.pop() {
            let Some(i) = self.index(pos.x, pos.y) else {
                continue;
            };
            if visited[i] || !self.cells[i].is_walkable() {
                continue;
            }
            visited[i] = true;
            count += 1;

            stack.push(pos.offset(-1, 0));
            stack.push(pos.offset(1, 0));
            stack.push(pos.offset(0, -1));
            stack.push(pos.offset(0, 1));
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
