//! Level generation: rooms and corridors
//!
//! Rooms are placed at random and may overlap each other. The first room's
//! center becomes the start position, and each later room is linked by an
//! L-shaped corridor to the anchor chosen by the configured topology.
//!
//! Draw order per room is width, height, x, y, then one corridor orientation
//! for every room after the first. A given seed always carves the same map.

use log::debug;

use crate::consts::ROOM_MARGIN;
use crate::errors::Result;
use crate::rng::GameRng;

use super::corridor::dig_corridor;
use super::{Dungeon, DungeonConfig, Grid, Room};

/// Place one room of random size and position inside the grid margins.
///
/// `config` must already be validated.
fn random_room(config: &DungeonConfig, rng: &mut GameRng) -> Room {
    let width = rng.range_inclusive(config.min_room_size..=config.max_room_size);
    let height = rng.range_inclusive(config.min_room_size..=config.max_room_size);
    let x = rng.range_inclusive(ROOM_MARGIN..=config.width - width - ROOM_MARGIN);
    let y = rng.range_inclusive(ROOM_MARGIN..=config.height - height - ROOM_MARGIN);
    Room::new(x, y, width, height)
}

/// Generate a level of rooms joined by corridors
pub fn generate_rooms_and_corridors(config: DungeonConfig, rng: &mut GameRng) -> Result<Dungeon> {
    config.validate()?;

    let mut grid = Grid::new(config.width, config.height);
    let num_rooms = rng.range_inclusive(config.min_rooms..=config.max_rooms) as usize;
    debug!(
        "generating {}x{} dungeon with {} rooms ({} topology)",
        config.width, config.height, num_rooms, config.topology
    );

    let mut rooms: Vec<Room> = Vec::with_capacity(num_rooms);

    // validate() guarantees at least one room
    let first = random_room(&config, rng);
    first.carve(&mut grid);
    let start = first.center();
    debug!(
        "room 0: {}x{} at ({}, {}), start {start}",
        first.width, first.height, first.x, first.y
    );
    rooms.push(first);

    for index in 1..num_rooms {
        let room = random_room(&config, rng);
        room.carve(&mut grid);
        debug!(
            "room {index}: {}x{} at ({}, {})",
            room.width, room.height, room.x, room.y
        );

        let from = config.topology.anchor(start, &rooms, index);
        dig_corridor(&mut grid, from, room.center(), rng);
        rooms.push(room);
    }

    Ok(Dungeon {
        config,
        grid,
        start,
        rooms,
    })
}
