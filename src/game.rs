use log::info;
use rand::Rng;

use crate::{
    bitboard::{BitBoard, BitBoardError},
    board::Board,
    common::{BoardError, GuessResult},
    config::GameConfig,
    coord::{parse_guess, Coord},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Serializable summary of a game, for reports and the `sim` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board_size: usize,
    pub guesses: usize,
    pub hits: usize,
    pub misses: usize,
    pub ships_total: usize,
    pub ships_remaining: usize,
    pub status: GameStatus,
}

/// Core game logic holding the board, guess history and remaining ships.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    guesses: BitBoard,
    hits: usize,
    remaining: usize,
}

impl GameEngine {
    /// Validate `config` and place every ship at random.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        config.validate()?;
        let mut board = Board::new(config.board_size, &config.ship_sizes);
        board.place_all(rng)?;
        info!(
            "new {}x{} game with {} ships",
            config.board_size,
            config.board_size,
            config.num_ships()
        );
        Ok(Self::with_board(config, board))
    }

    /// Start a game on a board whose ships are already placed.
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, BoardError> {
        config.validate()?;
        if board.size() != config.board_size || board.ship_sizes() != config.ship_sizes.as_slice() {
            return Err(BoardError::BoardMismatch);
        }
        if !board.is_fully_placed() {
            return Err(BoardError::UnableToPlaceShip);
        }
        let n = board.size();
        let played = (0..n)
            .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
            .any(|c| board.cell(c).is_some_and(|cell| cell.is_struck()));
        if played {
            return Err(BoardError::BoardMismatch);
        }
        Ok(Self::with_board(config, board))
    }

    fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            guesses: BitBoard::new(config.board_size),
            hits: 0,
            remaining: config.num_ships(),
            config,
            board,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every coordinate guessed so far.
    pub fn guesses(&self) -> &BitBoard {
        &self.guesses
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.count_ones()
    }

    /// Ships not yet sunk.
    pub fn remaining_ships(&self) -> usize {
        self.remaining
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// Resolve one guess. Repeats report `AlreadyGuessed` and change nothing.
    pub fn apply_guess(&mut self, coord: Coord) -> Result<GuessResult, BoardError> {
        if self.is_won() {
            return Err(BoardError::GameOver);
        }
        let out_of_bounds = |_: BitBoardError| BoardError::OutOfBounds(coord);
        if self.guesses.get(coord.row, coord.col).map_err(out_of_bounds)? {
            return Ok(GuessResult::AlreadyGuessed);
        }
        // history is only recorded once the board accepted the strike
        let result = self.board.strike(coord)?;
        self.guesses.set(coord.row, coord.col).map_err(out_of_bounds)?;
        match result {
            GuessResult::Hit => self.hits += 1,
            GuessResult::HitAndSunk(_) => {
                self.hits += 1;
                self.remaining -= 1;
                if self.remaining == 0 {
                    info!("all ships sunk after {} guesses", self.guess_count());
                }
            }
            GuessResult::Miss | GuessResult::AlreadyGuessed => {}
        }
        Ok(result)
    }

    /// Parse raw player input and resolve it.
    pub fn guess(&mut self, raw: &str) -> Result<GuessResult, BoardError> {
        let coord = parse_guess(raw, self.config.board_size)?;
        self.apply_guess(coord)
    }

    /// Fresh random layout, empty history and every ship afloat.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.board.place_all(rng)?;
        self.guesses.clear_all();
        self.hits = 0;
        self.remaining = self.config.num_ships();
        info!("board reset");
        Ok(())
    }

    /// Generate a serializable summary of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let guesses = self.guess_count();
        GameSnapshot {
            board_size: self.config.board_size,
            guesses,
            hits: self.hits,
            misses: guesses - self.hits,
            ships_total: self.config.num_ships(),
            ships_remaining: self.remaining,
            status: self.status(),
        }
    }
}
