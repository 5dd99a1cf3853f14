//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_guess, AiPlayer, BoardError, BoardView, Coord, GameConfig, GameEngine, GameStatus,
    GuessResult, Player, Session,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
