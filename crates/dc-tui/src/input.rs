//! Input handling - convert key events to commands
//!
//! Arrow keys, WASD and vi keys (hjkl, yubn for diagonals) move; Esc, q and
//! Ctrl+C quit; r carves a new dungeon.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dc_core::action::{Command, Direction};

/// Convert a key event to a game command.
///
/// Key releases are ignored so terminals that report them do not double-step.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Regenerate),

        // Arrow keys
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),

        // Vi keys
        KeyCode::Char('h') => Some(Command::Move(Direction::West)),
        KeyCode::Char('j') => Some(Command::Move(Direction::South)),
        KeyCode::Char('k') => Some(Command::Move(Direction::North)),
        KeyCode::Char('l') => Some(Command::Move(Direction::East)),
        KeyCode::Char('y') => Some(Command::Move(Direction::NorthWest)),
        KeyCode::Char('u') => Some(Command::Move(Direction::NorthEast)),
        KeyCode::Char('b') => Some(Command::Move(Direction::SouthWest)),
        KeyCode::Char('n') => Some(Command::Move(Direction::SouthEast)),

        // WASD
        KeyCode::Char('w') => Some(Command::Move(Direction::North)),
        KeyCode::Char('a') => Some(Command::Move(Direction::West)),
        KeyCode::Char('s') => Some(Command::Move(Direction::South)),
        KeyCode::Char('d') => Some(Command::Move(Direction::East)),

        _ => None,
    }
}
