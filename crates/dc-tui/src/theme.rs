//! Terminal color theme system
//!
//! Provides color palettes for dark and light terminal backgrounds.
//! Auto-detects via the COLORFGBG env var, or manual override with the
//! --light flag or DC_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Avatar color: tan
pub const AVATAR_TAN: Color = Color::Rgb(210, 180, 140);

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (key help)
    pub text_dim: Color,
    /// Map frame
    pub border: Color,
    /// Status line values
    pub accent: Color,

    // Map
    pub map_player: Color,
    pub map_wall: Color,
    pub map_floor: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            accent: Color::Cyan,
            map_player: AVATAR_TAN,
            map_wall: Color::Gray,
            map_floor: Color::White,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Blue,
            map_player: AVATAR_TAN,
            map_wall: Color::DarkGray,
            map_floor: Color::Black,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and DC_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("DC_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices 0-15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return is_light_index(bg_idx);
        }

        false
    }
}

/// Light backgrounds have bg index 7 or 9-15 (8 is bright black)
fn is_light_index(bg_idx: u8) -> bool {
    matches!(bg_idx, 7 | 9..=15)
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
