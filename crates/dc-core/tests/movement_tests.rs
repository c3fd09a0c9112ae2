use dc_core::action::{Direction, FrameIntent};
use dc_core::dungeon::{DungeonConfig, Grid, Position};
use dc_core::player::Avatar;
use dc_core::{GameSession, MovementPolicy};
use proptest::prelude::*;

fn intent(dirs: &[Direction]) -> FrameIntent {
    let mut intent = FrameIntent::default();
    for &dir in dirs {
        intent.hold(dir);
    }
    intent
}

#[test]
fn test_wall_then_floor_scenario() {
    // (6,5) wall, (5,6) floor
    let mut grid = Grid::new(10, 10);
    for y in 1..9 {
        for x in 1..9 {
            grid.set(x, y, dc_core::dungeon::CellState::Floor);
        }
    }
    grid.set(6, 5, dc_core::dungeon::CellState::Wall);

    let mut avatar = Avatar::new(Position::new(5, 5));
    avatar.try_move(1, 0, &grid);
    assert_eq!(avatar.pos(), Position::new(5, 5));
    avatar.try_move(0, 1, &grid);
    assert_eq!(avatar.pos(), Position::new(5, 6));
}

#[test]
fn test_left_edge_is_silent() {
    let grid = Grid::from_rows(&["...", "...", "..."]);
    let mut avatar = Avatar::new(Position::new(0, 1));
    assert!(!avatar.try_move(-1, 0, &grid));
    assert_eq!(avatar.pos().x, 0);
}

#[test]
fn test_sequential_slides_along_open_axis() {
    let grid = Grid::from_rows(&[
        "#####",
        "#..##",
        "#.###",
        "#####",
    ]);
    let held = intent(&[Direction::SouthEast]);

    let mut avatar = Avatar::new(Position::new(1, 1));
    assert!(MovementPolicy::Sequential.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(2, 1));

    let mut avatar = Avatar::new(Position::new(1, 1));
    assert!(!MovementPolicy::Combined.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(1, 1));
}

#[test]
fn test_combined_cuts_corners() {
    let grid = Grid::from_rows(&[
        "#####",
        "#.###",
        "##.##",
        "#####",
    ]);
    let held = intent(&[Direction::East, Direction::South]);

    let mut avatar = Avatar::new(Position::new(1, 1));
    assert!(!MovementPolicy::Sequential.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(1, 1));

    let mut avatar = Avatar::new(Position::new(1, 1));
    assert!(MovementPolicy::Combined.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(2, 2));
}

#[test]
fn test_sequential_opposites_step_twice() {
    let grid = Grid::from_rows(&["....."]);
    let held = intent(&[Direction::West, Direction::East]);

    // Left then right: back where it started
    let mut avatar = Avatar::new(Position::new(2, 0));
    assert!(!MovementPolicy::Sequential.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(2, 0));

    // Left is blocked at the edge, right still applies
    let mut avatar = Avatar::new(Position::new(0, 0));
    assert!(MovementPolicy::Sequential.apply(&mut avatar, &grid, &held));
    assert_eq!(avatar.pos(), Position::new(1, 0));
}

#[test]
fn test_session_applies_policy() {
    let mut session = GameSession::new(DungeonConfig::default(), 9).unwrap();
    let start = session.avatar().pos();
    assert!(!session.apply_intent(&FrameIntent::default()));
    assert_eq!(session.avatar().pos(), start);
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
        Just(Direction::NorthEast),
        Just(Direction::NorthWest),
        Just(Direction::SouthEast),
        Just(Direction::SouthWest),
    ]
}

fn policy() -> impl Strategy<Value = MovementPolicy> {
    prop_oneof![Just(MovementPolicy::Sequential), Just(MovementPolicy::Combined)]
}

proptest! {
    #[test]
    fn prop_avatar_stays_on_floor(
        seed: u64,
        policy in policy(),
        frames in prop::collection::vec(prop::collection::vec(direction(), 0..3), 0..200),
    ) {
        let mut session = GameSession::new(DungeonConfig::default(), seed)
            .unwrap()
            .with_policy(policy);
        for held in frames {
            session.apply_intent(&intent(&held));
            let pos = session.avatar().pos();
            prop_assert!(session.grid().in_bounds(pos.x, pos.y));
            prop_assert!(session.grid().is_walkable(pos.x, pos.y));
        }
    }

    #[test]
    fn prop_single_steps_stay_on_floor(
        seed: u64,
        moves in prop::collection::vec((-1i32..=1, -1i32..=1), 0..300),
    ) {
        let session = GameSession::new(DungeonConfig::new(20, 15), seed).unwrap();
        let grid = session.grid();
        let mut avatar = *session.avatar();
        for (dx, dy) in moves {
            let before = avatar.pos();
            let moved = avatar.try_move(dx, dy, grid);
            prop_assert!(grid.is_walkable_at(avatar.pos()));
            if !moved {
                prop_assert_eq!(avatar.pos(), before);
            }
        }
    }
}
