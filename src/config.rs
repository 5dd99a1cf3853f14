use alloc::vec;
use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::coord::Coord;
use crate::ship::Orientation;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_SHIP_SIZES: [usize; 5] = [2, 3, 3, 4, 5];

/// Rows are lettered, so the board can be at most `A..=Z` tall.
pub const MAX_BOARD_SIZE: usize = 26;

/// Random anchors tried for one ship before the layout is restarted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Random layouts tried before falling back to [`pack_rows`].
pub const MAX_LAYOUT_ATTEMPTS: usize = 1000;

/// Board size and ship catalog for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_sizes: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ship_sizes: DEFAULT_SHIP_SIZES.to_vec(),
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(board_size: usize, ship_sizes: Vec<usize>) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            ship_sizes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Number of ships in the catalog.
    pub fn num_ships(&self) -> usize {
        self.ship_sizes.len()
    }

    /// Total number of ship segments.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_sizes.iter().sum()
    }

    /// Reject boards the catalog cannot be placed on.
    ///
    /// A config passes only if [`pack_rows`] finds a layout, so random
    /// placement always has a known fallback and never spins forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.board_size;
        if n == 0 || n > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.ship_sizes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, &length) in self.ship_sizes.iter().enumerate() {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip { index });
            }
            if length > n {
                return Err(ConfigError::ShipTooLong {
                    index,
                    length,
                    board_size: n,
                });
            }
        }
        let cells = self.total_ship_cells();
        if cells > n * n {
            return Err(ConfigError::CatalogTooLarge {
                cells,
                capacity: n * n,
            });
        }
        if pack_rows(n, &self.ship_sizes).is_none() {
            return Err(ConfigError::CatalogDoesNotFit { board_size: n });
        }
        Ok(())
    }
}

/// Deterministic layout: every ship horizontal, longest first, each into the
/// first row with room left. Returns one `(origin, orientation)` per ship in
/// catalog order, or `None` if some ship finds no row.
pub fn pack_rows(board_size: usize, ship_sizes: &[usize]) -> Option<Vec<(Coord, Orientation)>> {
    let mut order: Vec<usize> = (0..ship_sizes.len()).collect();
    order.sort_by(|&a, &b| ship_sizes[b].cmp(&ship_sizes[a]));

    let mut next_free = vec![0usize; board_size];
    let mut layout = vec![(Coord::new(0, 0), Orientation::Horizontal); ship_sizes.len()];
    for id in order {
        let length = ship_sizes[id];
        let row = next_free
            .iter()
            .position(|&used| used + length <= board_size)?;
        layout[id] = (Coord::new(row, next_free[row]), Orientation::Horizontal);
        next_free[row] += length;
    }
    Some(layout)
}
