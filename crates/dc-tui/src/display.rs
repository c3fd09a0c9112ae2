//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and fancy Unicode characters.

use dc_core::dungeon::{CellState, Grid};
use dc_core::player::Avatar;
use strum::{Display, EnumString};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Fancy Unicode block characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering the map.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a dungeon cell.
    fn cell_char(&self, cell: CellState) -> char;

    /// Get the character for the avatar.
    fn avatar_char(&self) -> char {
        '@'
    }
}

/// Plain ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn cell_char(&self, cell: CellState) -> char {
        cell.symbol()
    }
}

/// Unicode glyph set: solid blocks for rock, a middle dot for floor.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn cell_char(&self, cell: CellState) -> char {
        match cell {
            CellState::Wall => '█',
            CellState::Floor => '·',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }

    if let Ok(term) = std::env::var("TERM")
        && matches!(
            term.as_str(),
            "xterm-256color" | "alacritty" | "kitty" | "iterm"
        )
    {
        return true;
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}

/// Render the map as plain text, one line per row, with the avatar drawn over
/// its cell.
pub fn text_map(grid: &Grid, avatar: &Avatar, glyphs: &dyn GlyphSet) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()).max(0) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if avatar.pos().x == x && avatar.pos().y == y {
                out.push(glyphs.avatar_char());
            } else {
                out.push(glyphs.cell_char(grid.cell_state(x, y)));
            }
        }
        out.push('\n');
    }
    out
}
