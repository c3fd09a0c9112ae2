//! dc-core: Core game logic for the dungeon crawler
//!
//! This crate contains the grid model, the room-and-corridor generator and
//! avatar movement, with no I/O dependencies. It is designed to be pure and
//! testable: every random draw goes through a seeded [`GameRng`].

pub mod action;
pub mod dungeon;
pub mod errors;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use errors::{ConfigError, DungeonError};
pub use gameloop::{GameLoopResult, GameSession, MovementPolicy};
pub use rng::GameRng;
