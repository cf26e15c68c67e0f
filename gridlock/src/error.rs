use std::num::ParseIntError;

use thiserror::Error;

use crate::position::Position;

/// Why the solver gave up on a configuration. Losing the game is not an
/// error (it is an [`Outcome`](crate::game::Outcome)); these are analysis
/// failures and internal divergences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("robot at {at} shares no row or column with any other")]
    IsolatedRobot { at: Position },
    #[error("robot at {at} would converge on the player's own line")]
    OnPlayerLine { at: Position },
    #[error("robots cannot be split into convergence groups")]
    AmbiguousGrouping,
    #[error("no admissible move from here")]
    NoMoveAvailable,
    #[error("convergence left a lone robot at {at}")]
    IncompleteMerge { at: Position },
    #[error("solver desynced from the game: {0}")]
    Inconsistency(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("invalid integer {token:?}")]
    BadInteger {
        token: String,
        source: ParseIntError,
    },
    #[error("need an even number of integers to form coordinates, got {count}")]
    OddCoordinateCount { count: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown move {ch:?}, expected one of u, d, l, r")]
pub struct ParseMoveError {
    pub ch: char,
}
