use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;
use crate::position::PositionDelta;

/// One of the four player moves. `u` increases y, `d` decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn delta(self) -> PositionDelta {
        match self {
            Move::Up => PositionDelta::new(0, 1),
            Move::Down => PositionDelta::new(0, -1),
            Move::Left => PositionDelta::new(-1, 0),
            Move::Right => PositionDelta::new(1, 0),
        }
    }

    /// Every move, in the order the solver considers them.
    pub fn all() -> [Self; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }

    pub fn from_char(c: char) -> Result<Self, ParseMoveError> {
        match c {
            'u' => Ok(Move::Up),
            'd' => Ok(Move::Down),
            'l' => Ok(Move::Left),
            'r' => Ok(Move::Right),
            _ => Err(ParseMoveError { ch: c }),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Move::Up => 'u',
            Move::Down => 'd',
            Move::Left => 'l',
            Move::Right => 'r',
        }
    }
}

/// Parses a compact move string such as `"lluur"`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.chars().map(Move::from_char).collect()
}

pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|m| m.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_characters_round_trip() {
        let parsed = parse_moves("udlr").unwrap();
        assert_eq!(parsed, [Move::Up, Move::Down, Move::Left, Move::Right]);
        assert_eq!(format_moves(&parsed), "udlr");
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(parse_moves("ulx"), Err(ParseMoveError { ch: 'x' }));
        assert_eq!(parse_moves("u d"), Err(ParseMoveError { ch: ' ' }));
    }
}
