use crossterm::event::KeyCode;

use crate::engine::Direction;

/// Maps a key to the direction it steers. Any key other than the arrows is
/// ignored.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::North),
        KeyCode::Down => Some(Direction::South),
        KeyCode::Left => Some(Direction::West),
        KeyCode::Right => Some(Direction::East),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for(KeyCode::Up), Some(Direction::North));
        assert_eq!(direction_for(KeyCode::Down), Some(Direction::South));
        assert_eq!(direction_for(KeyCode::Left), Some(Direction::West));
        assert_eq!(direction_for(KeyCode::Right), Some(Direction::East));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(direction_for(KeyCode::Char('w')), None);
        assert_eq!(direction_for(KeyCode::Char(' ')), None);
        assert_eq!(direction_for(KeyCode::Enter), None);
        assert_eq!(direction_for(KeyCode::Esc), None);
    }
}
