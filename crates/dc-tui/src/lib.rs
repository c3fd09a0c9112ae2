//! dc-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the dungeon crawler.

pub mod app;
pub mod display;
pub mod input;
pub mod logging;
pub mod pacer;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use display::GraphicsMode;
pub use pacer::FramePacer;
pub use theme::Theme;
