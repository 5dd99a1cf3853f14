//! Game board: a grid of tagged cells plus the ships laid on it.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, GuessResult, ShipId};
use crate::config::{pack_rows, MAX_LAYOUT_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(ShipId),
    Hit(ShipId),
    Miss,
}

impl Cell {
    /// Ship occupying the cell, struck or not.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(id),
            Cell::Empty | Cell::Miss => None,
        }
    }

    /// `true` once the cell has been guessed.
    pub fn is_struck(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }
}

/// Main board state: cells and ship placements.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    ship_sizes: Vec<usize>,
    cells: Vec<Cell>,
    ships: Vec<Option<Ship>>,
}

impl Board {
    /// Create an empty `size×size` board for the given catalog (no ships placed).
    pub fn new(size: usize, ship_sizes: &[usize]) -> Self {
        Board {
            size,
            ship_sizes: ship_sizes.to_vec(),
            cells: vec![Cell::Empty; size * size],
            ships: vec![None; ship_sizes.len()],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ship lengths this board is laid out for.
    pub fn ship_sizes(&self) -> &[usize] {
        &self.ship_sizes
    }

    /// Cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.within(self.size) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Placed ships, in catalog order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id).and_then(Option::as_ref)
    }

    /// `true` when every ship in the catalog has been placed.
    pub fn is_fully_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.is_fully_placed() && self.ships().all(Ship::is_sunk)
    }

    /// Remove every ship and mark.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
        self.ships.iter_mut().for_each(|s| *s = None);
    }

    /// Place a single ship by index at `origin` with `orientation`.
    pub fn place(
        &mut self,
        ship_index: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let length = *self
            .ship_sizes
            .get(ship_index)
            .ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(ship_index, length, orientation, origin, self.size)?;
        if !self.run_is_clear(ship.cells()) {
            return Err(BoardError::ShipOverlaps);
        }
        for &coord in ship.cells() {
            let idx = self.index(coord);
            self.cells[idx] = Cell::Occupied(ship_index);
        }
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping `(origin, orientation)` for `ship_index`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: ShipId,
    ) -> Result<(Coord, Orientation), BoardError> {
        let length = *self
            .ship_sizes
            .get(ship_index)
            .ok_or(BoardError::InvalidIndex)?;
        if length == 0 || length > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = Orientation::random(rng);
            let (max_r, max_c) = orient.max_anchor(self.size, length);
            let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let clear = (0..length).all(|i| {
                self.cell(orient.step(origin, i)) == Some(Cell::Empty)
            });
            if clear {
                return Ok((origin, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the whole catalog at random, in catalog order.
    ///
    /// A ship that finds no spot restarts the layout from an empty board;
    /// after [`MAX_LAYOUT_ATTEMPTS`] restarts the packed layout is used.
    pub fn place_all<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for attempt in 1..=MAX_LAYOUT_ATTEMPTS {
            self.clear();
            match self.try_place_all(rng) {
                Ok(()) => {
                    debug!("placed {} ships after {} layout(s)", self.ships.len(), attempt);
                    return Ok(());
                }
                Err(BoardError::UnableToPlaceShip) => {
                    debug!("layout {} got stuck, restarting", attempt);
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            "random placement failed {} times on a {}x{} board, using packed layout",
            MAX_LAYOUT_ATTEMPTS, self.size, self.size
        );
        self.clear();
        let layout = pack_rows(self.size, &self.ship_sizes).ok_or(BoardError::UnableToPlaceShip)?;
        for (id, (origin, orient)) in layout.into_iter().enumerate() {
            self.place(id, origin, orient)?;
        }
        Ok(())
    }

    fn try_place_all<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..self.ship_sizes.len() {
            let (origin, orient) = self.random_placement(rng, i)?;
            self.place(i, origin, orient)?;
        }
        Ok(())
    }

    /// Strike the cell at `coord`, marking a hit or miss and reporting the result.
    pub fn strike(&mut self, coord: Coord) -> Result<GuessResult, BoardError> {
        let cell = self.cell(coord).ok_or(BoardError::OutOfBounds(coord))?;
        let idx = self.index(coord);
        match cell {
            Cell::Hit(_) | Cell::Miss => Err(BoardError::AlreadyGuessed),
            Cell::Empty => {
                self.cells[idx] = Cell::Miss;
                Ok(GuessResult::Miss)
            }
            Cell::Occupied(id) => {
                self.cells[idx] = Cell::Hit(id);
                let ship = self
                    .ships
                    .get_mut(id)
                    .and_then(Option::as_mut)
                    .ok_or(BoardError::InvalidIndex)?;
                ship.register_hit(coord);
                if ship.is_sunk() {
                    Ok(GuessResult::HitAndSunk(id))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
        }
    }

    fn run_is_clear(&self, run: &[Coord]) -> bool {
        run.iter().all(|&c| self.cell(c) == Some(Cell::Empty))
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn manual_overlap_rejected() {
        let mut board = Board::new(4, &[3, 2]);
        board.place(0, Coord::new(1, 0), Orientation::Horizontal).unwrap();
        assert_eq!(
            board.place(1, Coord::new(0, 1), Orientation::Vertical),
            Err(BoardError::ShipOverlaps)
        );
        // touching is fine
        board.place(1, Coord::new(2, 0), Orientation::Horizontal).unwrap();
        assert!(board.is_fully_placed());
    }

    #[test]
    fn tight_board_falls_back_or_fits() {
        // 3×3 filled by three rows of three
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new(3, &[3, 3, 3]);
        board.place_all(&mut rng).unwrap();
        assert!(board.is_fully_placed());
        let occupied = (0..3)
            .flat_map(|r| (0..3).map(move |c| Coord::new(r, c)))
            .filter(|&c| board.cell(c).and_then(|cell| cell.ship()).is_some())
            .count();
        assert_eq!(occupied, 9);
    }

    #[test]
    fn strike_off_board() {
        let mut board = Board::new(3, &[2]);
        assert_eq!(
            board.strike(Coord::new(3, 0)),
            Err(BoardError::OutOfBounds(Coord::new(3, 0)))
        );
    }
}
