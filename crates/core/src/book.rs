//! Book module - the ordered set of tile definitions
//!
//! Index 0 is always the blank tile. It marks vacant board cells and is never
//! drawn into the player's hand. A book is validated once when it is built;
//! any malformed track rejects the whole book.

use std::ops::RangeInclusive;

use crate::error::BookError;
use crate::tile::{TileMap, Track, TrackFault};
use crate::types::{Direction, Entrance, TileId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBook {
    tiles: Vec<TileMap>,
}

impl TileBook {
    /// Build a book from tile definitions, validating every track.
    pub fn new(tiles: Vec<TileMap>) -> Result<Self, BookError> {
        if tiles.len() < 2 {
            return Err(BookError::NothingToDraw { len: tiles.len() });
        }
        if tiles.len() > TileId::MAX as usize + 1 {
            return Err(BookError::TooManyTiles { len: tiles.len() });
        }

        for (tile, map) in tiles.iter().enumerate() {
            for (track, t) in map.tracks.iter().enumerate() {
                t.check().map_err(|fault| match fault {
                    TrackFault::OutOfBounds(at) => BookError::OutOfBounds { tile, track, at },
                    TrackFault::Misrouted(end) => BookError::Misrouted {
                        tile,
                        track,
                        finish: t.finish,
                        end,
                    },
                })?;
            }
        }

        tracing::debug!(tiles = tiles.len(), "tile book validated");
        Ok(Self { tiles })
    }

    /// The built-in book: the blank tile followed by five path tiles.
    pub fn standard() -> Result<Self, BookError> {
        Self::new(standard_tiles()?)
    }

    pub fn get(&self, id: TileId) -> Option<&TileMap> {
        self.tiles.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Identifiers that may be dealt into a hand.
    pub fn drawable(&self) -> RangeInclusive<TileId> {
        1..=(self.tiles.len() - 1) as TileId
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TileMap)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, map)| (i as TileId, map))
    }
}

fn standard_tiles() -> Result<Vec<TileMap>, BookError> {
    use Direction::{East as E, North as N, South as S, West as W};
    use Entrance::*;

    fn tile(tracks: [(Entrance, Entrance, &[Direction]); 4]) -> Result<TileMap, BookError> {
        let [a, b, c, d] = tracks;
        Ok(TileMap::new([
            Track::new(a.0, a.1, a.2)?,
            Track::new(b.0, b.1, b.2)?,
            Track::new(c.0, c.1, c.2)?,
            Track::new(d.0, d.1, d.2)?,
        ]))
    }

    Ok(vec![
        TileMap::blank(),
        // 1  │  ╰─╮
        // ─╮ ╰╮   ╰─
        //  │  ╰─╮
        // ─╯ ╭──┼───
        //    │  │
        tile([
            (N1, S2, &[S, E, S, E, E, S, S]),
            (N2, E1, &[E, E, S, E]),
            (W1, W2, &[E, S, S, W]),
            (S1, E2, &[N, E, E, E, E, E, E]),
        ])?,
        // 2  │  │
        // ───┼──┼───
        //    │  │
        // ───┼──┼───
        //    │  │
        tile([
            (N1, S1, &[S, S, S, S]),
            (N2, S2, &[S, S, S, S]),
            (W1, E1, &[E, E, E, E, E, E, E, E, E]),
            (W2, E2, &[E, E, E, E, E, E, E, E, E]),
        ])?,
        // 3  │  ╰╮
        // ───╯ ╭─┼──
        //    ╭─╯ ╰╮
        // ╮  │╭───┼─
        // ╰──┼╯ ╭─╯
        tile([
            (N1, W1, &[S, W, W, W]),
            (N2, S2, &[E, S, S, E, S, S, W, W]),
            (W2, E2, &[S, E, E, E, E, N, E, E, E, E, E]),
            (S1, E1, &[N, N, E, E, N, E, E, E, E]),
        ])?,
        // 4╭─┼──┼╮
        // ─╯ ╰╮╭╯╰──
        //     ╰┼╮
        // ─╮ ╭─╯│ ╭─
        //  ╰─┼──┼─╯
        tile([
            (W2, E2, &[E, S, E, E, E, E, E, E, E, N, E]),
            (W1, E1, &[E, N, E, E, E, E, E, E, S, E, E]),
            (N1, S2, &[S, E, S, E, E, S, S]),
            (N2, S1, &[S, W, S, S, W, W, S]),
        ])?,
        // 5  ╰─╮│
        // ───╮╭┼╯╭──
        //    ││╰─┼╮
        // ───┼╯  │╰─
        //    │  ╭╯
        tile([
            (W2, N2, &[E, E, E, E, N, N, E, E, N]),
            (W1, S1, &[E, E, E, S, S, S]),
            (N1, E2, &[E, E, S, S, E, E, E, S, E]),
            (S2, E1, &[E, N, N, N, E, E]),
        ])?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn standard_book_validates() {
        let book = TileBook::standard().unwrap();
        assert_eq!(book.len(), 6);
        assert_eq!(book.drawable(), 1..=5);
    }

    #[test]
    fn every_standard_track_lands_on_its_finish() {
        let book = TileBook::standard().unwrap();
        for (id, map) in book.iter() {
            for t in &map.tracks {
                assert_eq!(t.end(), t.finish.location(), "tile {id}");
            }
        }
    }

    #[test]
    fn path_tiles_use_each_entrance_once() {
        let book = TileBook::standard().unwrap();
        for (id, map) in book.iter().skip(1) {
            let mut used: Vec<Entrance> = map
                .tracks
                .iter()
                .flat_map(|t| [t.start, t.finish])
                .collect();
            used.sort_by_key(|e| e.as_str());
            used.dedup();
            assert_eq!(used.len(), 8, "tile {id}");
        }
    }

    #[test]
    fn one_bad_track_rejects_the_book() {
        let mut tiles = standard_tiles().unwrap();
        tiles[3].tracks[2] = Track::new(Entrance::N1, Entrance::N2, &[]).unwrap();

        assert_eq!(
            TileBook::new(tiles),
            Err(BookError::Misrouted {
                tile: 3,
                track: 2,
                finish: Entrance::N2,
                end: Coord::new(3, 0),
            })
        );
    }

    #[test]
    fn off_tile_route_rejects_the_book() {
        let mut tiles = standard_tiles().unwrap();
        tiles[5].tracks[3] = Track::new(
            Entrance::S2,
            Entrance::W1,
            &[
                Direction::East,
                Direction::North,
                Direction::North,
                Direction::North,
                Direction::East,
                Direction::East,
                Direction::East,
            ],
        )
        .unwrap();

        assert!(matches!(
            TileBook::new(tiles),
            Err(BookError::OutOfBounds { tile: 5, track: 3, .. })
        ));
    }

    #[test]
    fn book_needs_a_drawable_tile() {
        assert_eq!(
            TileBook::new(vec![TileMap::blank()]),
            Err(BookError::NothingToDraw { len: 1 })
        );
        assert_eq!(
            TileBook::new(Vec::new()),
            Err(BookError::NothingToDraw { len: 0 })
        );
    }

    #[test]
    fn get_is_none_past_the_end() {
        let book = TileBook::standard().unwrap();
        assert!(book.get(5).is_some());
        assert!(book.get(6).is_none());
    }
}
