//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 6 | Tiles per board row |
//! | `BOARD_HEIGHT` | 6 | Tiles per board column |
//! | `TILE_WIDTH` | 10 | Character cells per tile row |
//! | `TILE_HEIGHT` | 5 | Character cells per tile column |
//!
//! # Tile Entrances
//!
//! Every tile has eight entrances, two per edge:
//!
//! ```text
//!             N1     N2
//!            (3,0)  (6,0)
//!  W1 (0,1)              (9,1) E1
//!  W2 (0,3)              (9,3) E2
//!            (3,4)  (6,4)
//!             S1     S2
//! ```
//!
//! A ninth, [`Entrance::Null`], sits at the origin and is used by the blank tile.
//!
//! # Examples
//!
//! ```
//! use tui_round_types::{Coord, Direction, Entrance};
//!
//! assert_eq!(Direction::East.reverse(), Direction::West);
//! assert_eq!(Entrance::N1.entering(), Direction::South);
//!
//! let mut pt = Entrance::W1.location();
//! pt += Direction::East;
//! assert_eq!(pt, Coord::new(1, 1));
//! ```

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Board width in tiles (6 columns)
pub const BOARD_WIDTH: u8 = 6;

/// Board height in tiles (6 rows)
pub const BOARD_HEIGHT: u8 = 6;

/// Tile width in terminal cells
pub const TILE_WIDTH: u8 = 10;

/// Tile height in terminal cells
pub const TILE_HEIGHT: u8 = 5;

/// Identifier of a tile in the tile book. `0` is the blank tile and marks a vacant board cell.
pub type TileId = u16;

/// The reserved "no tile" identifier.
pub const NO_TILE: TileId = 0;

/// One of the four directions of travel across a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction.
    ///
    /// ```
    /// use tui_round_types::Direction;
    ///
    /// for d in Direction::ALL {
    ///     assert_eq!(d.reverse().reverse(), d);
    ///     assert_ne!(d.reverse(), d);
    /// }
    /// ```
    pub fn reverse(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Unit step for one move in this direction. North is towards row 0.
    pub fn delta(self) -> Delta {
        match self {
            Direction::East => Delta::new(1, 0),
            Direction::North => Delta::new(0, -1),
            Direction::South => Delta::new(0, 1),
            Direction::West => Delta::new(-1, 0),
        }
    }
}

/// A cell position on a tile's character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// True if this position lies on a `TILE_WIDTH` x `TILE_HEIGHT` grid.
    pub fn is_on_tile(self) -> bool {
        self.x >= 0 && self.x < TILE_WIDTH as i8 && self.y >= 0 && self.y < TILE_HEIGHT as i8
    }
}

/// Offset between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub dx: i8,
    pub dy: i8,
}

impl Delta {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

impl AddAssign<Delta> for Coord {
    fn add_assign(&mut self, v: Delta) {
        self.x += v.dx;
        self.y += v.dy;
    }
}

impl Add<Delta> for Coord {
    type Output = Coord;

    fn add(mut self, v: Delta) -> Coord {
        self += v;
        self
    }
}

impl SubAssign<Delta> for Coord {
    fn sub_assign(&mut self, v: Delta) {
        self.x -= v.dx;
        self.y -= v.dy;
    }
}

impl Sub<Delta> for Coord {
    type Output = Coord;

    fn sub(mut self, v: Delta) -> Coord {
        self -= v;
        self
    }
}

/// `a - b` is the delta that takes `b` to `a`.
impl Sub<Coord> for Coord {
    type Output = Delta;

    fn sub(self, b: Coord) -> Delta {
        Delta::new(self.x - b.x, self.y - b.y)
    }
}

impl AddAssign<Direction> for Coord {
    fn add_assign(&mut self, d: Direction) {
        *self += d.delta();
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, d: Direction) -> Coord {
        self + d.delta()
    }
}

impl SubAssign<Direction> for Coord {
    fn sub_assign(&mut self, d: Direction) {
        *self -= d.delta();
    }
}

impl Sub<Direction> for Coord {
    type Output = Coord;

    fn sub(self, d: Direction) -> Coord {
        self - d.delta()
    }
}

/// Points on the tile border where a track may cross into a neighbouring tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrance {
    /// Placeholder used by the blank tile.
    Null,
    E1,
    E2,
    N1,
    N2,
    S1,
    S2,
    W1,
    W2,
}

impl Entrance {
    pub const ALL: [Entrance; 9] = [
        Entrance::Null,
        Entrance::E1,
        Entrance::E2,
        Entrance::N1,
        Entrance::N2,
        Entrance::S1,
        Entrance::S2,
        Entrance::W1,
        Entrance::W2,
    ];

    /// Cell of the tile grid occupied by this entrance.
    pub fn location(self) -> Coord {
        const X_W: i8 = 0;
        const X_E: i8 = TILE_WIDTH as i8 - 1;
        const Y_N: i8 = 0;
        const Y_S: i8 = TILE_HEIGHT as i8 - 1;

        const Y_1: i8 = 1;
        const Y_2: i8 = 3;
        const X_1: i8 = 3;
        const X_2: i8 = 6;

        match self {
            Entrance::Null => Coord::new(0, 0),
            Entrance::E1 => Coord::new(X_E, Y_1),
            Entrance::E2 => Coord::new(X_E, Y_2),
            Entrance::N1 => Coord::new(X_1, Y_N),
            Entrance::N2 => Coord::new(X_2, Y_N),
            Entrance::S1 => Coord::new(X_1, Y_S),
            Entrance::S2 => Coord::new(X_2, Y_S),
            Entrance::W1 => Coord::new(X_W, Y_1),
            Entrance::W2 => Coord::new(X_W, Y_2),
        }
    }

    /// Direction of travel when arriving through this entrance.
    ///
    /// The null entrance enters travelling east (arbitrary but fixed).
    pub fn entering(self) -> Direction {
        match self {
            Entrance::Null => Direction::East,
            Entrance::E1 | Entrance::E2 => Direction::West,
            Entrance::N1 | Entrance::N2 => Direction::South,
            Entrance::S1 | Entrance::S2 => Direction::North,
            Entrance::W1 | Entrance::W2 => Direction::East,
        }
    }

    /// Direction of travel when leaving the tile through this entrance.
    pub fn exiting(self) -> Direction {
        self.entering().reverse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Entrance::Null => "z0",
            Entrance::E1 => "e1",
            Entrance::E2 => "e2",
            Entrance::N1 => "n1",
            Entrance::N2 => "n2",
            Entrance::S1 => "s1",
            Entrance::S2 => "s2",
            Entrance::W1 => "w1",
            Entrance::W2 => "w2",
        }
    }
}

/// Player actions that mutate the round.
///
/// Quitting is not an action; the driver handles it before mapping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the hand one tile left (leaves the board from column 0)
    MoveLeft,
    /// Move the hand one tile right (enters the board from off-board)
    MoveRight,
    /// Move the hand one tile up
    MoveUp,
    /// Move the hand one tile down
    MoveDown,
    /// Place the held tile on the board under the hand
    Place,
    /// Discard the held tile and draw a new one
    Redraw,
}

impl GameAction {
    /// camelCase name, used as a field value in log events
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Place => "place",
            GameAction::Redraw => "redraw",
        }
    }
}
