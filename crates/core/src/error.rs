//! Tile book validation errors.

use crate::types::{Coord, Entrance};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("route of {len} steps exceeds the {max} cells of a tile")]
    RouteTooLong { len: usize, max: usize },

    #[error("tile {tile} track {track} leaves the tile at ({}, {})", at.x, at.y)]
    OutOfBounds { tile: usize, track: usize, at: Coord },

    #[error(
        "tile {tile} track {track} should finish at {} but ends at ({}, {})",
        finish.as_str(),
        end.x,
        end.y
    )]
    Misrouted {
        tile: usize,
        track: usize,
        finish: Entrance,
        end: Coord,
    },

    #[error("tile book has {len} entries; at least one tile besides the blank is required")]
    NothingToDraw { len: usize },

    #[error("tile book has {len} entries, more than identifiers can address")]
    TooManyTiles { len: usize },
}
