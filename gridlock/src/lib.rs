pub mod board;
pub mod direction;
pub mod error;
pub mod game;
pub mod position;
pub mod solver;
