//! Widgets for the game screen

mod map;
mod status;

pub use map::MapWidget;
pub use status::StatusWidget;
