//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use dc_core::dungeon::{CellState, Grid};
use dc_core::player::Avatar;

use crate::display::GlyphSet;
use crate::theme::Theme;

/// Widget for rendering the dungeon map
pub struct MapWidget<'a> {
    grid: &'a Grid,
    avatar: &'a Avatar,
    theme: &'a Theme,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> MapWidget<'a> {
    pub fn new(
        grid: &'a Grid,
        avatar: &'a Avatar,
        theme: &'a Theme,
        glyphs: &'a dyn GlyphSet,
    ) -> Self {
        Self {
            grid,
            avatar,
            theme,
            glyphs,
        }
    }

    fn cell_display(&self, x: i32, y: i32) -> (char, Style) {
        let pos = self.avatar.pos();
        if pos.x == x && pos.y == y {
            return (
                self.glyphs.avatar_char(),
                Style::default().fg(self.theme.map_player).bold(),
            );
        }

        let cell = self.grid.cell_state(x, y);
        let color = match cell {
            CellState::Wall => self.theme.map_wall,
            CellState::Floor => self.theme.map_floor,
        };
        (self.glyphs.cell_char(cell), Style::default().fg(color))
    }
}

/// First grid index shown along one axis: centered on `focus`, clamped so the
/// window never runs past either edge. Zero when the whole axis fits.
fn scroll_offset(focus: i32, len: i32, view: i32) -> i32 {
    if len <= view {
        return 0;
    }
    (focus - view / 2).clamp(0, len - view)
}

/// Cells drawn along one axis
fn visible_span(remaining: i32, view: u16) -> u16 {
    u16::try_from(remaining.max(0))
        .unwrap_or(u16::MAX)
        .min(view)
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        // Scroll so the avatar stays on screen when the map is larger than the frame
        let pos = self.avatar.pos();
        let left = scroll_offset(pos.x, self.grid.width(), i32::from(inner.width));
        let top = scroll_offset(pos.y, self.grid.height(), i32::from(inner.height));
        let cols = visible_span(self.grid.width() - left, inner.width);
        let rows = visible_span(self.grid.height() - top, inner.height);
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(left + i32::from(x), top + i32::from(y));
                if let Some(cell) = buf.cell_mut(Position::new(inner.x + x, inner.y + y)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
