//! Twist module - glyph category for one cell of a track
//!
//! A twist is named by the two sides of the cell the path leaves through.
//! Straight runs join opposite sides, bends join adjacent ones. Crossing is
//! never resolved from a pair of directions; it only appears when a stamp
//! composes two tracks onto the same cell.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Twist {
    /// Nothing drawn
    Empty,
    EastNorth,
    EastSouth,
    EastWest,
    NorthSouth,
    NorthWest,
    SouthWest,
    /// Two tracks through one cell
    Crossing,
}

impl Twist {
    /// Twist for a path that comes in travelling `incoming` and leaves travelling `outgoing`.
    ///
    /// The path enters through the side opposite to its travel, so the cell
    /// joins `incoming.reverse()` and `outgoing`.
    ///
    /// ```
    /// use tui_round_core::Twist;
    /// use tui_round_core::types::Direction;
    ///
    /// assert_eq!(Twist::resolve(Direction::East, Direction::East), Twist::EastWest);
    /// assert_eq!(Twist::resolve(Direction::South, Direction::East), Twist::EastNorth);
    /// ```
    pub fn resolve(incoming: Direction, outgoing: Direction) -> Self {
        Self::joining(incoming.reverse(), outgoing)
    }

    /// Twist joining two sides of a cell. Order does not matter; the same side twice is empty.
    pub fn joining(a: Direction, b: Direction) -> Self {
        use Direction::{East, North, South, West};

        match (a, b) {
            (East, North) | (North, East) => Twist::EastNorth,
            (East, South) | (South, East) => Twist::EastSouth,
            (East, West) | (West, East) => Twist::EastWest,
            (North, South) | (South, North) => Twist::NorthSouth,
            (North, West) | (West, North) => Twist::NorthWest,
            (South, West) | (West, South) => Twist::SouthWest,
            (East, East) | (North, North) | (South, South) | (West, West) => Twist::Empty,
        }
    }

    /// Box-drawing character for this twist.
    pub fn glyph(self) -> char {
        match self {
            Twist::Empty => ' ',
            Twist::EastNorth => '╰',
            Twist::EastSouth => '╭',
            Twist::EastWest => '─',
            Twist::NorthSouth => '│',
            Twist::NorthWest => '╯',
            Twist::SouthWest => '╮',
            Twist::Crossing => '┼',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_symmetric_under_traversal_direction() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(
                    Twist::resolve(a, b),
                    Twist::resolve(b.reverse(), a.reverse()),
                    "{a:?} -> {b:?}"
                );
            }
        }
    }

    #[test]
    fn every_distinct_pair_has_a_drawn_non_crossing_twist() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                let t = Twist::joining(a, b);
                if a == b {
                    assert_eq!(t, Twist::Empty);
                } else {
                    assert_ne!(t, Twist::Empty);
                    assert_ne!(t, Twist::Crossing);
                }
            }
        }
    }

    #[test]
    fn six_distinct_two_way_twists() {
        let mut seen = Vec::new();
        for a in Direction::ALL {
            for b in Direction::ALL {
                let t = Twist::joining(a, b);
                if t != Twist::Empty && !seen.contains(&t) {
                    seen.push(t);
                }
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn u_turn_resolves_to_empty() {
        for d in Direction::ALL {
            assert_eq!(Twist::resolve(d, d.reverse()), Twist::Empty);
        }
    }

    #[test]
    fn bends_pick_the_matching_corner_glyph() {
        // Arriving from the north side, leaving east.
        assert_eq!(Twist::resolve(Direction::South, Direction::East).glyph(), '╰');
        // Arriving from the west side, leaving south.
        assert_eq!(Twist::resolve(Direction::East, Direction::South).glyph(), '╮');
        assert_eq!(Twist::resolve(Direction::North, Direction::North).glyph(), '│');
        assert_eq!(Twist::Crossing.glyph(), '┼');
    }
}
