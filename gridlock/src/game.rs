use std::fmt;

use crate::direction::Move;
use crate::position::Position;

/// What a single step produced. Losing is a result, not an error: the game
/// simply refuses to go anywhere afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player survived. `crash` describes robots that wrecked each
    /// other this step, or is empty.
    Alive { crash: String },
    Lost(LossReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    /// The player stepped onto an occupied cell.
    MovedIntoRobot { at: Position },
    /// A robot reached the player; `from` is where it started the step.
    KilledByRobot { from: Position },
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossReason::MovedIntoRobot { at } => write!(f, "moved into robot at {at}"),
            LossReason::KilledByRobot { from } => write!(f, "robot at {from} killed us"),
        }
    }
}

/// Core game state: the player and every robot still on the field, on an
/// unbounded grid. Robots never leave the list except by wrecking.
#[derive(Clone, Debug)]
pub struct Game {
    player: Position,
    robots: Vec<Position>,
    lost: bool,
}

impl Game {
    pub fn new(player: Position, robots: Vec<Position>) -> Self {
        Self {
            player,
            robots,
            lost: false,
        }
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn robots(&self) -> &[Position] {
        &self.robots
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Resolves one turn: the player moves first, then robots sharing a
    /// cell wreck each other, then every survivor takes one step toward the
    /// player. Stepping onto a robot loses immediately and leaves the
    /// robots where they were; a robot reaching the player loses after all
    /// robots have moved.
    pub fn step(&mut self, m: Move) -> Outcome {
        debug_assert!(!self.lost);
        self.player = self.player + m.delta();

        if self.robots.contains(&self.player) {
            self.lost = true;
            return Outcome::Lost(LossReason::MovedIntoRobot { at: self.player });
        }

        let crash = self.remove_crashed();

        let mut killer = None;
        for robot in &mut self.robots {
            let from = *robot;
            *robot = from.step_toward(self.player);
            if *robot == self.player && killer.is_none() {
                killer = Some(from);
            }
        }
        if let Some(from) = killer {
            self.lost = true;
            return Outcome::Lost(LossReason::KilledByRobot { from });
        }
        Outcome::Alive { crash }
    }

    /// Plays moves in order, stopping at the first loss. Returns the
    /// outcome of the last step taken.
    pub fn play_all(&mut self, moves: &[Move]) -> Outcome {
        let mut last = Outcome::Alive {
            crash: String::new(),
        };
        for &m in moves {
            last = self.step(m);
            if self.lost {
                break;
            }
        }
        last
    }

    /// Removes every robot that shares its cell with another and describes
    /// the wrecks, one cell each, in the order the robot list first reaches
    /// them.
    fn remove_crashed(&mut self) -> String {
        let mut cells: Vec<Position> = Vec::new();
        for (i, &pos) in self.robots.iter().enumerate() {
            let shared = self
                .robots
                .iter()
                .enumerate()
                .any(|(j, &other)| j != i && other == pos);
            if shared && !cells.contains(&pos) {
                cells.push(pos);
            }
        }
        if cells.is_empty() {
            return String::new();
        }
        self.robots.retain(|pos| !cells.contains(pos));
        let described: Vec<String> = cells.iter().map(Position::to_string).collect();
        format!("crash at {}", described.join(" and "))
    }

    /// Robot coordinates then the player's, space-separated; the same shape
    /// the board parser accepts.
    pub fn state_line(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for robot in &self.robots {
            parts.push(robot.x.to_string());
            parts.push(robot.y.to_string());
        }
        parts.push(self.player.x.to_string());
        parts.push(self.player.y.to_string());
        parts.join(" ")
    }

    /// `state_line` with the step's crash text appended after ` -- `, or
    /// unchanged when nothing crashed.
    pub fn state_line_with(&self, crash: &str) -> String {
        if crash.is_empty() {
            self.state_line()
        } else {
            format!("{} -- {}", self.state_line(), crash)
        }
    }
}

#[cfg(test)]
mod tests;
