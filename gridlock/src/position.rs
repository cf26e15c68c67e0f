use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A cell on the unbounded playfield. Coordinates grow rightward in x and
/// upward in y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One pursuit step toward `target`: each axis independently advances a
    /// single cell, or holds when already level. Never overshoots.
    pub fn step_toward(self, target: Position) -> Position {
        Position {
            x: self.x + (target.x - self.x).signum(),
            y: self.y + (target.y - self.y).signum(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct PositionDelta {
    pub dx: i32,
    pub dy: i32,
}

impl PositionDelta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Add<PositionDelta> for Position {
    type Output = Position;

    fn add(self, delta: PositionDelta) -> Position {
        let x = self.x + delta.dx;
        let y = self.y + delta.dy;
        Position { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_toward_closes_each_axis_independently() {
        let chaser = Position::new(0, 0);
        assert_eq!(chaser.step_toward(Position::new(5, -5)), Position::new(1, -1));
        assert_eq!(chaser.step_toward(Position::new(5, 0)), Position::new(1, 0));
        assert_eq!(chaser.step_toward(Position::new(0, -5)), Position::new(0, -1));
    }

    #[test]
    fn step_toward_never_overshoots() {
        let chaser = Position::new(2, 3);
        assert_eq!(chaser.step_toward(Position::new(3, 3)), Position::new(3, 3));
        assert_eq!(chaser.step_toward(chaser), chaser);
    }

    #[test]
    fn displays_as_coordinate_pair() {
        assert_eq!(Position::new(-3, 12).to_string(), "(-3, 12)");
    }
}
