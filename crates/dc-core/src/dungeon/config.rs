//! Generation parameters
//!
//! A [`DungeonConfig`] is checked with [`DungeonConfig::validate`] before any
//! random draw, so an undersized grid is reported instead of failing halfway
//! through room placement.

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, GRID_CELL_LIMIT, MAX_ROOM_SIZE, MAX_ROOMS, MIN_ROOM_SIZE,
    MIN_ROOMS, ROOM_COUNT_LIMIT, ROOM_MARGIN,
};
use crate::errors::{ConfigError, Result};

use super::CorridorTopology;

/// Parameters for one dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    /// Rooms to carve, inclusive
    pub min_rooms: u32,
    pub max_rooms: u32,
    /// Room side length, inclusive
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub topology: CorridorTopology,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_rooms: MIN_ROOMS,
            max_rooms: MAX_ROOMS,
            min_room_size: MIN_ROOM_SIZE,
            max_room_size: MAX_ROOM_SIZE,
            topology: CorridorTopology::Star,
        }
    }
}

impl DungeonConfig {
    /// Default room parameters on a `width` x `height` grid
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_room_count(mut self, min: u32, max: u32) -> Self {
        self.min_rooms = min;
        self.max_rooms = max;
        self
    }

    pub fn with_room_size(mut self, min: i32, max: i32) -> Self {
        self.min_room_size = min;
        self.max_room_size = max;
        self
    }

    pub fn with_topology(mut self, topology: CorridorTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Smallest width and height that fit the largest room plus its margins
    pub fn min_dimension(&self) -> i32 {
        self.max_room_size.saturating_add(2 * ROOM_MARGIN)
    }

    /// Reject configurations the generator cannot carve
    pub fn validate(&self) -> Result<()> {
        if self.min_room_size <= 0 {
            return Err(ConfigError::ZeroRoomSize.into());
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::EmptyRoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            }
            .into());
        }
        if self.min_rooms == 0 {
            return Err(ConfigError::ZeroRoomCount.into());
        }
        if self.min_rooms > self.max_rooms {
            return Err(ConfigError::EmptyRoomCountRange {
                min: self.min_rooms,
                max: self.max_rooms,
            }
            .into());
        }
        if self.max_rooms > ROOM_COUNT_LIMIT {
            return Err(ConfigError::TooManyRooms {
                max: self.max_rooms,
                limit: ROOM_COUNT_LIMIT,
            }
            .into());
        }

        let min = self.min_dimension();
        if self.width < min || self.height < min {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min_width: min,
                min_height: min,
            }
            .into());
        }
        if i64::from(self.width) * i64::from(self.height) > GRID_CELL_LIMIT {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max_cells: GRID_CELL_LIMIT,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DungeonError;

    #[test]
    fn test_default_is_valid() {
        let config = DungeonConfig::default();
        assert_eq!((config.width, config.height), (25, 25));
        assert_eq!(config.min_dimension(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimum_grid_accepted() {
        assert!(DungeonConfig::new(8, 8).validate().is_ok());
    }

    #[test]
    fn test_undersized_grid_rejected() {
        for (w, h) in [(7, 25), (25, 7), (0, 0), (-4, 10)] {
            let err = DungeonConfig::new(w, h).validate().unwrap_err();
            assert!(
                matches!(
                    err,
                    DungeonError::Configuration(ConfigError::GridTooSmall { min_width: 8, .. })
                ),
                "{w}x{h} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_room_size_drives_minimum() {
        let config = DungeonConfig::new(10, 10).with_room_size(3, 9);
        assert_eq!(config.min_dimension(), 11);
        assert!(config.validate().is_err());
        assert!(config.with_room_size(3, 8).validate().is_ok());
    }

    #[test]
    fn test_bad_ranges_rejected() {
        let base = DungeonConfig::default();
        assert_eq!(
            base.with_room_count(6, 2).validate(),
            Err(ConfigError::EmptyRoomCountRange { min: 6, max: 2 }.into())
        );
        assert_eq!(
            base.with_room_size(5, 4).validate(),
            Err(ConfigError::EmptyRoomSizeRange { min: 5, max: 4 }.into())
        );
        assert_eq!(
            base.with_room_size(0, 4).validate(),
            Err(ConfigError::ZeroRoomSize.into())
        );
        assert_eq!(
            base.with_room_count(0, 3).validate(),
            Err(ConfigError::ZeroRoomCount.into())
        );
    }

    #[test]
    fn test_oversized_room_counts_rejected() {
        let base = DungeonConfig::default();
        assert_eq!(
            base.with_room_count(3_000_000_000, 3_000_000_000).validate(),
            Err(ConfigError::TooManyRooms {
                max: 3_000_000_000,
                limit: ROOM_COUNT_LIMIT,
            }
            .into())
        );
        assert!(matches!(
            base.with_room_count(5, u32::MAX).validate(),
            Err(DungeonError::Configuration(ConfigError::TooManyRooms { .. }))
        ));
        assert!(base.with_room_count(5, ROOM_COUNT_LIMIT).validate().is_ok());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = DungeonConfig::new(100_000, 100_000).validate().unwrap_err();
        assert!(matches!(
            err,
            DungeonError::Configuration(ConfigError::GridTooLarge { .. })
        ));
        assert!(DungeonConfig::new(4096, 4096).validate().is_ok());
        assert!(DungeonConfig::new(i32::MAX, 8).validate().is_err());
    }

    #[test]
    fn test_huge_room_size_does_not_overflow() {
        let config = DungeonConfig::default().with_room_size(3, i32::MAX);
        assert_eq!(config.min_dimension(), i32::MAX);
        assert!(config.validate().is_err());
    }
}
