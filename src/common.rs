//! Common types for Battleship: guess results and engine errors.

use core::fmt;

use crate::coord::{Coord, ParseError};

/// Index of a ship in the configured ship-size catalog.
pub type ShipId = usize;

/// Result of resolving a guess against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Coordinate was guessed before; nothing changed.
    AlreadyGuessed,
    /// Guess missed all ships.
    Miss,
    /// Guess hit a ship that is still afloat.
    Hit,
    /// Guess hit the last intact cell of the ship.
    HitAndSunk(ShipId),
}

impl GuessResult {
    /// `true` for `Hit` and `HitAndSunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessResult::Hit | GuessResult::HitAndSunk(_))
    }
}

/// Rejections raised while validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side must be in `1..=max` (rows are lettered `A..`).
    InvalidBoardSize { size: usize, max: usize },
    /// No ships to place.
    EmptyCatalog,
    /// A ship must occupy at least one cell.
    ZeroLengthShip { index: usize },
    /// A ship is longer than the board side.
    ShipTooLong {
        index: usize,
        length: usize,
        board_size: usize,
    },
    /// The ships need more cells than the board has.
    CatalogTooLarge { cells: usize, capacity: usize },
    /// The ships cannot be laid out without overlapping.
    CatalogDoesNotFit { board_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize { size, max } => {
                write!(f, "Board size {} is invalid, must be between 1 and {}", size, max)
            }
            ConfigError::EmptyCatalog => write!(f, "Ship catalog is empty"),
            ConfigError::ZeroLengthShip { index } => {
                write!(f, "Ship {} has zero length", index)
            }
            ConfigError::ShipTooLong {
                index,
                length,
                board_size,
            } => write!(
                f,
                "Ship {} of length {} does not fit on a {}x{} board",
                index, length, board_size, board_size
            ),
            ConfigError::CatalogTooLarge { cells, capacity } => write!(
                f,
                "Ships need {} cells but the board only has {}",
                cells, capacity
            ),
            ConfigError::CatalogDoesNotFit { board_size } => write!(
                f,
                "Ships cannot be placed on a {}x{} board without overlapping",
                board_size, board_size
            ),
        }
    }
}

/// Errors returned by Board and GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Configuration was rejected before placement.
    Config(ConfigError),
    /// Raw guess text could not be parsed.
    InvalidInput(ParseError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the grid.
    ShipOutOfBounds,
    /// Cell was already struck on the board.
    AlreadyGuessed,
    /// Unable to place ship (random or packed placement failed).
    UnableToPlaceShip,
    /// Coordinate lies outside the board.
    OutOfBounds(Coord),
    /// All ships are sunk; reset before guessing again.
    GameOver,
    /// Board does not match the configuration or was already played on.
    BoardMismatch,
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::Config(err)
    }
}

impl From<ParseError> for BoardError {
    fn from(err: ParseError) -> Self {
        BoardError::InvalidInput(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Config(e) => write!(f, "Invalid configuration: {}", e),
            BoardError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is outside the board", c),
            BoardError::GameOver => write!(f, "Game is over, reset to play again"),
            BoardError::BoardMismatch => write!(f, "Board does not match the game configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
