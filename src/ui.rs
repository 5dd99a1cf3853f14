//! Text rendering of the board and the messages shown to the player.
//!
//! The view only exposes what the player has uncovered: unguessed cells are
//! blank whether or not a ship sits there.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::board::{Board, Cell};
use crate::common::GuessResult;
use crate::coord::{row_label, Coord};

pub const HIT: &str = "Hit!";
pub const MISS: &str = "You missed that one... Try another!";
pub const SUNK: &str = "Ship sank!";
pub const ALREADY_GUESSED: &str = "You already tried this location!";
pub const INVALID_INPUT: &str = "Invalid Input";
pub const WIN_PROMPT: &str = "You win! Play again?";
pub const START_PROMPT: &str = "Press any key!";

/// What the player knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Unknown,
    Hit,
    Miss,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Marker::Unknown => ' ',
            Marker::Hit => 'X',
            Marker::Miss => 'O',
        }
    }
}

/// Player-facing view of a board.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Marker at `coord`; off-board cells read as unknown.
    pub fn marker(&self, coord: Coord) -> Marker {
        match self.board.cell(coord) {
            Some(Cell::Hit(_)) => Marker::Hit,
            Some(Cell::Miss) => Marker::Miss,
            _ => Marker::Unknown,
        }
    }

    /// Every cell with its marker, row by row.
    pub fn markers(&self) -> impl Iterator<Item = (Coord, Marker)> + '_ {
        let n = self.size();
        (0..n * n).map(move |i| {
            let coord = Coord::new(i / n, i % n);
            (coord, self.marker(coord))
        })
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        write!(f, " ")?;
        for c in 0..n {
            write!(f, " {}", c + 1)?;
        }
        writeln!(f)?;
        let rule = "-".repeat(n * 2 + 1);
        writeln!(f, "{}", rule)?;
        for r in 0..n {
            write!(f, "{}|", row_label(r).unwrap_or('?'))?;
            for c in 0..n {
                write!(f, "{}|", self.marker(Coord::new(r, c)).symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", rule)
    }
}

/// Messages reported for a resolved guess, in order.
pub fn messages(result: GuessResult) -> &'static [&'static str] {
    match result {
        GuessResult::AlreadyGuessed => &[ALREADY_GUESSED],
        GuessResult::Miss => &[MISS],
        GuessResult::Hit => &[HIT],
        GuessResult::HitAndSunk(_) => &[HIT, SUNK],
    }
}

/// Range hint such as `A1 to J10`.
pub fn board_range(size: usize) -> String {
    format!("A1 to {}", Coord::new(size - 1, size - 1))
}

/// Prompt shown before each guess.
pub fn guess_prompt(size: usize) -> String {
    format!("Enter a location to strike! *e.g. {}: ", board_range(size))
}
