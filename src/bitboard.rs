//! A runtime-sized bitboard packed into unsigned integer words.
//!
//! Boards are an `n×n` grid stored row-major across a `Vec<W>`, so the board
//! size can come from configuration instead of a const parameter. The type
//! only needs `alloc` and holds the guess history.

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..n).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An `n×n` bitboard stored in words of type `W`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBoard<W = u64>
where
    W: PrimInt + Unsigned + Zero,
{
    n: usize,
    words: Vec<W>,
}

impl<W> BitBoard<W>
where
    W: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<W>() * 8;

    /// Create an empty `n×n` bitboard.
    pub fn new(n: usize) -> Self {
        let cells = n * n;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitBoard {
            n,
            words: vec![W::zero(); len],
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & W::one()) != W::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (W::one() << bit);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        for w in self.words.iter_mut() {
            *w = W::zero();
        }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), BitBoardError> {
        if row >= self.n || col >= self.n {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.n + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }
}

impl<W> fmt::Debug for BitBoard<W>
where
    W: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.n, self.n)?;
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
