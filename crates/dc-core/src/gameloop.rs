//! Game session: one dungeon, one avatar, and the rules that move it
//!
//! A session owns everything a run needs, so several can exist side by side.

use log::info;
use strum::{Display, EnumString};

use crate::action::{Command, FrameIntent};
use crate::dungeon::{Dungeon, DungeonConfig, Grid};
use crate::errors::Result;
use crate::player::Avatar;
use crate::rng::GameRng;

/// How a frame's held directions turn into steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MovementPolicy {
    /// One single-axis step per held direction, in the order left, right, up,
    /// down. Each step commits before the next one is checked.
    #[default]
    Sequential,
    /// Held directions are summed into one vector and checked once
    Combined,
}

impl MovementPolicy {
    /// Move `avatar` on `grid` for one frame of held directions.
    /// Returns true if the avatar ended somewhere else.
    pub fn apply(&self, avatar: &mut Avatar, grid: &Grid, intent: &FrameIntent) -> bool {
        if intent.is_empty() {
            return false;
        }
        let start = avatar.pos();
        match self {
            MovementPolicy::Sequential => {
                for (dx, dy) in intent.steps() {
                    avatar.try_move(dx, dy, grid);
                }
            }
            MovementPolicy::Combined => {
                let (dx, dy) = intent.combined_delta();
                if (dx, dy) != (0, 0) {
                    avatar.try_move(dx, dy, grid);
                }
            }
        }
        avatar.pos() != start
    }
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player quit
    PlayerQuit,
}

/// A dungeon with an avatar walking in it
#[derive(Debug, Clone)]
pub struct GameSession {
    dungeon: Dungeon,
    avatar: Avatar,
    rng: GameRng,
    policy: MovementPolicy,
    /// Seed the current dungeon was carved from
    seed: u64,
}

impl GameSession {
    /// Carve a dungeon from `seed` and spawn the avatar at its start position
    pub fn new(config: DungeonConfig, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        let dungeon = Dungeon::generate(config, &mut rng)?;
        let avatar = Avatar::new(dungeon.start_position());
        info!(
            "new dungeon: seed {seed}, {}x{}, {} rooms, start {}",
            dungeon.width(),
            dungeon.height(),
            dungeon.rooms().len(),
            avatar.pos()
        );
        Ok(Self {
            dungeon,
            avatar,
            rng,
            policy: MovementPolicy::default(),
            seed,
        })
    }

    pub fn with_policy(mut self, policy: MovementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn grid(&self) -> &Grid {
        self.dungeon.grid()
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply one frame of held directions. Returns true if the avatar moved.
    pub fn apply_intent(&mut self, intent: &FrameIntent) -> bool {
        self.policy
            .apply(&mut self.avatar, self.dungeon.grid(), intent)
    }

    /// Execute a single command
    pub fn execute(&mut self, command: Command) -> Result<GameLoopResult> {
        match command {
            Command::Move(dir) => {
                let mut intent = FrameIntent::default();
                intent.hold(dir);
                self.apply_intent(&intent);
            }
            Command::Regenerate => self.regenerate()?,
            Command::Quit => return Ok(GameLoopResult::PlayerQuit),
        }
        Ok(GameLoopResult::Continue)
    }

    /// Carve a fresh dungeon with the same configuration and a seed drawn
    /// from this session's stream, then respawn the avatar.
    pub fn regenerate(&mut self) -> Result<()> {
        let seed = self.rng.next_seed();
        let fresh = Self::new(*self.dungeon.config(), seed)?;
        *self = fresh.with_policy(self.policy);
        Ok(())
    }
}
