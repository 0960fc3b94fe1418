//! Tile module - tracks and tile definitions
//!
//! A track is a path from one entrance to another, stored as the directions
//! taken between cells. A route with `n` steps covers `n + 1` cells, starting
//! on the start entrance's cell and ending on the finish entrance's cell.
//!
//! Routes are bounded by the number of cells on a tile and stored inline, so
//! tile definitions never allocate.

use arrayvec::ArrayVec;

use crate::error::BookError;
use crate::twist::Twist;
use crate::types::{Coord, Direction, Entrance, TILE_HEIGHT, TILE_WIDTH};

/// Longest route a track may hold
pub const MAX_ROUTE_LEN: usize = (TILE_WIDTH as usize) * (TILE_HEIGHT as usize);

/// Tracks per tile
pub const TRACKS_PER_TILE: usize = 4;

/// One path through a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub start: Entrance,
    pub finish: Entrance,
    route: ArrayVec<Direction, MAX_ROUTE_LEN>,
}

/// A glyph to draw at one cell while rendering a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackWrite {
    pub at: Coord,
    pub twist: Twist,
}

/// Why a track does not describe a path across the tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackFault {
    OutOfBounds(Coord),
    Misrouted(Coord),
}

impl Track {
    pub fn new(start: Entrance, finish: Entrance, route: &[Direction]) -> Result<Self, BookError> {
        let mut steps = ArrayVec::new();
        steps
            .try_extend_from_slice(route)
            .map_err(|_| BookError::RouteTooLong {
                len: route.len(),
                max: MAX_ROUTE_LEN,
            })?;
        Ok(Self {
            start,
            finish,
            route: steps,
        })
    }

    /// A track that draws nothing.
    pub fn null() -> Self {
        Self {
            start: Entrance::Null,
            finish: Entrance::Null,
            route: ArrayVec::new(),
        }
    }

    pub fn route(&self) -> &[Direction] {
        &self.route
    }

    /// Cell reached after following the whole route from the start entrance.
    pub fn end(&self) -> Coord {
        self.route
            .iter()
            .fold(self.start.location(), |pt, &step| pt + step)
    }

    /// Glyph writes needed to draw this track, in path order.
    ///
    /// Yields one write per cell visited: `route().len() + 1` in total.
    pub fn writes(&self) -> TrackWrites<'_> {
        TrackWrites {
            track: self,
            at: self.start.location(),
            incoming: self.start.entering(),
            next: 0,
            done: false,
        }
    }

    /// Check that every visited cell is on the tile and the route ends on the finish entrance.
    pub(crate) fn check(&self) -> Result<(), TrackFault> {
        let mut pt = self.start.location();
        if !pt.is_on_tile() {
            return Err(TrackFault::OutOfBounds(pt));
        }
        for &step in &self.route {
            pt += step;
            if !pt.is_on_tile() {
                return Err(TrackFault::OutOfBounds(pt));
            }
        }
        if pt != self.finish.location() {
            return Err(TrackFault::Misrouted(pt));
        }
        Ok(())
    }
}

/// Iterator over the writes of a [`Track`].
#[derive(Debug, Clone)]
pub struct TrackWrites<'a> {
    track: &'a Track,
    at: Coord,
    incoming: Direction,
    next: usize,
    done: bool,
}

impl Iterator for TrackWrites<'_> {
    type Item = TrackWrite;

    fn next(&mut self) -> Option<TrackWrite> {
        if self.done {
            return None;
        }

        match self.track.route.get(self.next) {
            Some(&step) => {
                let write = TrackWrite {
                    at: self.at,
                    twist: Twist::resolve(self.incoming, step),
                };
                self.at += step;
                self.incoming = step;
                self.next += 1;
                Some(write)
            }
            None => {
                // Last cell: the path leaves through the finish entrance.
                self.done = true;
                Some(TrackWrite {
                    at: self.at,
                    twist: Twist::resolve(self.incoming, self.track.finish.exiting()),
                })
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.done {
            0
        } else {
            self.track.route.len() - self.next + 1
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for TrackWrites<'_> {}

/// A tile definition: exactly four tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    pub tracks: [Track; TRACKS_PER_TILE],
}

impl TileMap {
    pub fn new(tracks: [Track; TRACKS_PER_TILE]) -> Self {
        Self { tracks }
    }

    /// The reserved tile at index 0 of every book.
    pub fn blank() -> Self {
        Self {
            tracks: [Track::null(), Track::null(), Track::null(), Track::null()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{East as E, North as N, South as S, West as W};

    fn track(start: Entrance, finish: Entrance, route: &[Direction]) -> Track {
        Track::new(start, finish, route).unwrap()
    }

    #[test]
    fn straight_track_writes_one_glyph_per_cell() {
        let t = track(Entrance::N1, Entrance::S1, &[S, S, S, S]);
        let writes: Vec<_> = t.writes().collect();

        assert_eq!(writes.len(), 5);
        assert_eq!(t.writes().len(), 5);
        for (i, w) in writes.iter().enumerate() {
            assert_eq!(w.at, Coord::new(3, i as i8));
            assert_eq!(w.twist, Twist::NorthSouth);
        }
    }

    #[test]
    fn bend_uses_entrance_and_exit_directions() {
        // Enter from the west edge, turn down, back out west.
        let t = track(Entrance::W1, Entrance::W2, &[E, S, S, W]);
        let writes: Vec<_> = t.writes().map(|w| (w.at, w.twist)).collect();

        assert_eq!(
            writes,
            vec![
                (Coord::new(0, 1), Twist::EastWest),
                (Coord::new(1, 1), Twist::SouthWest),
                (Coord::new(1, 2), Twist::NorthSouth),
                (Coord::new(1, 3), Twist::NorthWest),
                (Coord::new(0, 3), Twist::EastWest),
            ]
        );
    }

    #[test]
    fn empty_route_resolves_once_at_the_start() {
        let t = Track::null();
        let writes: Vec<_> = t.writes().collect();
        assert_eq!(
            writes,
            vec![TrackWrite {
                at: Coord::new(0, 0),
                twist: Twist::Empty
            }]
        );
    }

    #[test]
    fn end_follows_the_route() {
        let t = track(Entrance::N2, Entrance::E1, &[E, E, S, E]);
        assert_eq!(t.end(), Entrance::E1.location());
        assert_eq!(t.check(), Ok(()));
    }

    #[test]
    fn check_rejects_a_route_that_stops_short() {
        let t = track(Entrance::N1, Entrance::N2, &[]);
        assert_eq!(t.check(), Err(TrackFault::Misrouted(Coord::new(3, 0))));
    }

    #[test]
    fn check_rejects_a_route_that_leaves_the_tile() {
        let t = track(Entrance::S2, Entrance::W1, &[E, N, N, N, E, E, E]);
        assert_eq!(t.check(), Err(TrackFault::OutOfBounds(Coord::new(10, 1))));
    }

    #[test]
    fn overlong_route_is_rejected() {
        let route = [E; MAX_ROUTE_LEN + 1];
        assert_eq!(
            Track::new(Entrance::W1, Entrance::E1, &route),
            Err(BookError::RouteTooLong {
                len: MAX_ROUTE_LEN + 1,
                max: MAX_ROUTE_LEN
            })
        );
    }

    #[test]
    fn blank_tile_tracks_are_valid() {
        for t in &TileMap::blank().tracks {
            assert_eq!(t.check(), Ok(()));
        }
    }
}
