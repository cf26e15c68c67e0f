use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBoardError;
use crate::game::Game;
use crate::position::Position;

/// A starting layout: every robot in input order, then the player. This is
/// the only place raw text becomes game state; the game and solver modules
/// work purely on positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub robots: Vec<Position>,
    pub player: Position,
}

impl Board {
    pub fn game(&self) -> Game {
        Game::new(self.player, self.robots.clone())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Whitespace-separated integers, paired into coordinates; the final
    /// pair is the player. Blank input is a lone player at the origin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords: Vec<Position> = Vec::new();
        let mut pending: Option<i32> = None;
        let mut count = 0usize;
        for token in s.split_whitespace() {
            let value: i32 = token.parse().map_err(|source| ParseBoardError::BadInteger {
                token: token.to_string(),
                source,
            })?;
            count += 1;
            match pending.take() {
                None => pending = Some(value),
                Some(x) => coords.push(Position::new(x, value)),
            }
        }
        if pending.is_some() {
            return Err(ParseBoardError::OddCoordinateCount { count });
        }
        let Some(player) = coords.pop() else {
            return Ok(Board {
                robots: Vec::new(),
                player: Position::new(0, 0),
            });
        };
        Ok(Board {
            robots: coords,
            player,
        })
    }
}
