//! Ships: straight runs of cells with a hit counter.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BoardError, ShipId};
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick an orientation uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The `i`-th cell of a run starting at `origin`.
    pub fn step(self, origin: Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
            Orientation::Vertical => Coord::new(origin.row + i, origin.col),
        }
    }

    /// Largest valid `(row, col)` anchor for a run of `length` on an `n×n` board.
    pub fn max_anchor(self, n: usize, length: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (n - 1, n - length),
            Orientation::Vertical => (n - length, n - 1),
        }
    }
}

/// A ship placed on an N×N board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    length: usize,
    orientation: Orientation,
    cells: Vec<Coord>,
    hits: usize,
}

impl Ship {
    /// Lay ship `id` of `length` from `origin` on a board of side `board_size`.
    pub fn new(
        id: ShipId,
        length: usize,
        orientation: Orientation,
        origin: Coord,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = orientation.step(origin, length - 1);
        if !origin.within(board_size) || !end.within(board_size) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = (0..length).map(|i| orientation.step(origin, i)).collect();
        Ok(Ship {
            id,
            length,
            orientation,
            cells,
            hits: 0,
        })
    }

    /// Count a hit if `coord` belongs to this ship. Returns `true` on a hit.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if !self.contains(coord) {
            return false;
        }
        if self.hits < self.length {
            self.hits += 1;
        }
        true
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the run.
    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    /// Occupied cells in order from the origin.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}
