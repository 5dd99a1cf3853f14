//! Board coordinates and the `A1`-style guess notation.
//!
//! A guess is one row letter followed by a 1-based column number of one or
//! two digits, so `A1` is the top-left cell and `J10` the bottom-right cell
//! of a 10×10 board.

use core::fmt;

/// A 0-based `(row, col)` position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if the coordinate lies on an `n×n` board.
    pub fn within(&self, n: usize) -> bool {
        self.row < n && self.col < n
    }

    /// Orthogonal neighbours that stay on an `n×n` board.
    pub fn neighbours(&self, n: usize) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |c| c.within(n))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_label(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "row {} col {}", self.row + 1, self.col + 1),
        }
    }
}

/// Letter used for a 0-based row index, `None` past `Z`.
pub fn row_label(row: usize) -> Option<char> {
    if row >= 26 {
        return None;
    }
    u32::try_from(row)
        .ok()
        .and_then(|r| char::from_u32(u32::from(b'A') + r))
}

/// Why a raw guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace.
    Empty,
    /// Guesses are two or three characters long.
    BadLength(usize),
    /// First character is not a row letter on this board.
    BadRow(char),
    /// Column part is not a number.
    BadColumn,
    /// Column number is outside `1..=board_size`.
    ColumnOutOfRange(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty guess"),
            ParseError::BadLength(len) => {
                write!(f, "expected 2 or 3 characters, got {}", len)
            }
            ParseError::BadRow(ch) => write!(f, "row '{}' is not on the board", ch),
            ParseError::BadColumn => write!(f, "column must be a number"),
            ParseError::ColumnOutOfRange(col) => {
                write!(f, "column {} is not on the board", col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a guess such as `"b7"` or `" J10 "` for an `n×n` board.
pub fn parse_guess(raw: &str, board_size: usize) -> Result<Coord, ParseError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let len = input.chars().count();
    if !(2..=3).contains(&len) {
        return Err(ParseError::BadLength(len));
    }

    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(ParseError::Empty)?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(ParseError::BadRow(row_ch));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= board_size {
        return Err(ParseError::BadRow(row_ch));
    }

    let digits = chars.as_str();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::BadColumn);
    }
    let col: usize = digits.parse().map_err(|_| ParseError::BadColumn)?;
    if col == 0 || col > board_size {
        return Err(ParseError::ColumnOutOfRange(col));
    }
    Ok(Coord::new(row, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_notation() {
        assert_eq!(Coord::new(0, 0).to_string(), "A1");
        assert_eq!(Coord::new(9, 9).to_string(), "J10");
        assert_eq!(Coord::new(25, 0).to_string(), "Z1");
    }

    #[test]
    fn rows_past_z_are_numbered() {
        assert_eq!(row_label(26), None);
        assert_eq!(Coord::new(26, 0).to_string(), "row 27 col 1");
        assert_eq!(Coord::new(256, 3).to_string(), "row 257 col 4");
        assert_eq!(Coord::new(usize::MAX - 1, 0).to_string(), format!("row {} col 1", usize::MAX));
    }

    #[test]
    fn neighbours_clip_to_board() {
        let corner: Vec<_> = Coord::new(0, 0).neighbours(3).collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);
        assert_eq!(Coord::new(1, 1).neighbours(3).count(), 4);
    }

    #[test]
    fn lowercase_and_padding() {
        assert_eq!(parse_guess("  c4 ", 10), Ok(Coord::new(2, 3)));
    }

    #[test]
    fn non_ascii_row() {
        assert!(matches!(parse_guess("É1", 10), Err(ParseError::BadRow('É'))));
    }
}
