//! City module - the grid of placed tiles
//!
//! The city is a 6x6 grid of tile identifiers where `0` means vacant.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..5 (left to right), y ranges 0..5 (top to bottom).
//!
//! Cells only ever go from vacant to occupied; a placed tile is never moved,
//! replaced or removed.

use crate::types::{TileId, BOARD_HEIGHT, BOARD_WIDTH, NO_TILE};

/// Total number of cells in the city
const CITY_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    /// Flat array of tile ids, row-major order (y * WIDTH + x)
    cells: [TileId; CITY_SIZE],
}

impl City {
    /// Create a new, entirely vacant city
    pub fn new() -> Self {
        Self {
            cells: [NO_TILE; CITY_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    ///
    /// Positions outside the grid are a caller bug.
    #[inline(always)]
    fn index(x: u8, y: u8) -> usize {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "city position ({x}, {y}) outside {BOARD_WIDTH}x{BOARD_HEIGHT} grid"
        );
        (y as usize) * (BOARD_WIDTH as usize) + (x as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Tile id at (x, y); `0` when vacant
    pub fn get(&self, x: u8, y: u8) -> TileId {
        self.cells[Self::index(x, y)]
    }

    pub fn is_vacant(&self, x: u8, y: u8) -> bool {
        self.get(x, y) == NO_TILE
    }

    /// Put `id` on a vacant cell.
    ///
    /// Returns false, leaving the city untouched, if the cell is already
    /// occupied or `id` is the blank tile.
    pub fn place(&mut self, x: u8, y: u8, id: TileId) -> bool {
        let idx = Self::index(x, y);
        if self.cells[idx] != NO_TILE || id == NO_TILE {
            return false;
        }
        self.cells[idx] = id;
        true
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&id| id != NO_TILE).count()
    }

    /// Occupied cells as `(x, y, id)`, row by row
    pub fn tiles(&self) -> impl Iterator<Item = (u8, u8, TileId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &id)| id != NO_TILE)
            .map(|(i, &id)| {
                let x = (i % BOARD_WIDTH as usize) as u8;
                let y = (i / BOARD_WIDTH as usize) as u8;
                (x, y, id)
            })
    }
}

impl Default for City {
    fn default() -> Self {
        Self::new()
    }
}
