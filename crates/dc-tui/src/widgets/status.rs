//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dc_core::GameSession;

use crate::theme::Theme;

/// Widget for rendering the status and key help lines
pub struct StatusWidget<'a> {
    session: &'a GameSession,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(session: &'a GameSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    /// Text of the first status line
    pub fn status_line(&self) -> String {
        let dungeon = self.session.dungeon();
        format!(
            "Pos:{} Seed:{} Map:{}x{} Rooms:{} Move:{}",
            self.session.avatar().pos(),
            self.session.seed(),
            dungeon.width(),
            dungeon.height(),
            dungeon.rooms().len(),
            self.session.policy(),
        )
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line1 = self.status_line();
        let line2 = "arrows/wasd/hjkl/yubn: move  r: new dungeon  q/Esc: quit";

        buf.set_string(
            area.x,
            area.y,
            &line1,
            Style::default().fg(self.theme.accent),
        );
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                line2,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
