//! Application state and main loop logic

use crossterm::event::Event;
use ratatui::prelude::*;

use dc_core::action::{Command, FrameIntent};
use dc_core::errors::Result;
use dc_core::{GameLoopResult, GameSession};

use crate::display::{self, GlyphSet, GraphicsMode};
use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// Application state
pub struct App {
    session: GameSession,

    /// Directions held since the last frame
    intent: FrameIntent,

    should_quit: bool,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// Glyph set for rendering map cells
    glyph_set: Box<dyn GlyphSet>,
}

impl App {
    pub fn new(session: GameSession, theme: Theme, graphics_mode: GraphicsMode) -> Self {
        Self {
            session,
            intent: FrameIntent::default(),
            should_quit: false,
            theme,
            glyph_set: display::detect_glyph_set(graphics_mode),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle an input event.
    ///
    /// Movement keys only mark a direction as held; the step happens in
    /// [`App::end_frame`]. Other commands run immediately.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        match key_to_command(key) {
            Some(Command::Move(dir)) => self.intent.hold(dir),
            Some(command) => {
                self.execute(command)?;
            }
            None => {}
        }
        Ok(())
    }

    /// Execute a command against the session
    pub fn execute(&mut self, command: Command) -> Result<GameLoopResult> {
        let result = self.session.execute(command)?;
        if result == GameLoopResult::PlayerQuit {
            self.should_quit = true;
        }
        if command == Command::Regenerate {
            self.intent.clear();
        }
        Ok(result)
    }

    /// Apply the directions held this frame, then release them.
    /// Returns true if the avatar moved.
    pub fn end_frame(&mut self) -> bool {
        let moved = self.session.apply_intent(&self.intent);
        self.intent.clear();
        moved
    }

    /// Per-frame world update. Nothing in the dungeon acts on its own yet.
    pub fn update(&mut self) {}

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Map + border on top, two status lines below
        let map_height = u16::try_from(self.session.dungeon().height())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(map_height), Constraint::Length(2)])
            .split(frame.area());

        let map_widget = MapWidget::new(
            self.session.grid(),
            self.session.avatar(),
            &self.theme,
            self.glyph_set.as_ref(),
        );
        frame.render_widget(map_widget, chunks[0]);

        let status_widget = StatusWidget::new(&self.session, &self.theme);
        frame.render_widget(status_widget, chunks[1]);
    }
}
