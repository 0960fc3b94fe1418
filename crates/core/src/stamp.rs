//! Stamp module - the rendered character grid of one tile
//!
//! Tracks are drawn one after another onto a blank grid. A cell that already
//! holds a glyph when a second one arrives becomes a crossing, whichever
//! track got there first. The tile identifier is written last, over the
//! top-left corner.

use crate::tile::TileMap;
use crate::twist::Twist;
use crate::types::{Coord, TileId, TILE_HEIGHT, TILE_WIDTH};

const STAMP_SIZE: usize = (TILE_WIDTH as usize) * (TILE_HEIGHT as usize);

const BLANK: char = ' ';

/// A `TILE_WIDTH` x `TILE_HEIGHT` grid of characters, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stamp {
    cells: [char; STAMP_SIZE],
}

impl Stamp {
    pub fn blank() -> Self {
        Self {
            cells: [BLANK; STAMP_SIZE],
        }
    }

    /// Draw every track of `map` and label the result with `id`.
    pub fn render(map: &TileMap, id: TileId) -> Self {
        let mut stamp = Self::blank();
        for track in &map.tracks {
            for write in track.writes() {
                stamp.mark(write.at, write.twist);
            }
        }
        stamp.label(id);
        stamp
    }

    pub fn width(&self) -> u16 {
        TILE_WIDTH as u16
    }

    pub fn height(&self) -> u16 {
        TILE_HEIGHT as u16
    }

    /// Character at `pt`.
    ///
    /// # Panics
    ///
    /// If `pt` is not on the tile.
    pub fn at(&self, pt: Coord) -> char {
        self.cells[Self::index(pt)]
    }

    /// Character at tile cell `(x, y)`; used when projecting onto a larger buffer.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is not on the tile.
    pub fn get(&self, x: u16, y: u16) -> char {
        assert!(
            x < TILE_WIDTH as u16 && y < TILE_HEIGHT as u16,
            "stamp position ({x}, {y}) outside {TILE_WIDTH}x{TILE_HEIGHT} tile"
        );
        self.at(Coord::new(x as i8, y as i8))
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(TILE_WIDTH as usize)
            .map(|row| row.iter().collect())
    }

    #[inline(always)]
    fn index(pt: Coord) -> usize {
        assert!(
            pt.is_on_tile(),
            "stamp position ({}, {}) outside {}x{} tile",
            pt.x,
            pt.y,
            TILE_WIDTH,
            TILE_HEIGHT
        );
        (pt.y as usize) * (TILE_WIDTH as usize) + (pt.x as usize)
    }

    /// Any write onto a drawn cell, even an empty twist, makes a crossing.
    fn mark(&mut self, pt: Coord, twist: Twist) {
        let cell = &mut self.cells[Self::index(pt)];
        if *cell != BLANK {
            *cell = Twist::Crossing.glyph();
        } else if twist != Twist::Empty {
            *cell = twist.glyph();
        }
    }

    fn label(&mut self, id: TileId) {
        let digits = id.to_string();
        for (i, ch) in digits.chars().take(TILE_WIDTH as usize).enumerate() {
            self.cells[i] = ch;
        }
    }
}

impl Default for Stamp {
    fn default() -> Self {
        Self::blank()
    }
}
