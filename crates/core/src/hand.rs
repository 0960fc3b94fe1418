//! Hand module - the player's held tile and cursor
//!
//! The hand sits either beside the board or on one of its cells. Moving left
//! off column 0 takes it off the board; moving right from off-board brings it
//! back onto column 0 of the row it left from. Every other move is clamped at
//! the board edges.

use crate::types::{TileId, BOARD_HEIGHT, BOARD_WIDTH};

/// Where the hand is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spot {
    /// Beside the board; `row` is where it re-enters.
    Off { row: u8 },
    On { x: u8, y: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    code: TileId,
    spot: Spot,
}

impl Hand {
    /// A fresh hand holding `code`, off the board.
    pub fn new(code: TileId) -> Self {
        Self {
            code,
            spot: Spot::Off { row: 0 },
        }
    }

    /// A hand holding `code` over board cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is not on the board.
    pub fn on_board(code: TileId, x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "hand position ({x}, {y}) outside {BOARD_WIDTH}x{BOARD_HEIGHT} board"
        );
        Self {
            code,
            spot: Spot::On { x, y },
        }
    }

    pub fn code(&self) -> TileId {
        self.code
    }

    pub fn spot(&self) -> Spot {
        self.spot
    }

    pub fn is_onboard(&self) -> bool {
        matches!(self.spot, Spot::On { .. })
    }

    /// Board cell under the hand, if on the board
    pub fn position(&self) -> Option<(u8, u8)> {
        match self.spot {
            Spot::On { x, y } => Some((x, y)),
            Spot::Off { .. } => None,
        }
    }

    pub fn is_here(&self, x: u8, y: u8) -> bool {
        self.position() == Some((x, y))
    }

    /// Returns true if the hand moved.
    pub fn move_left(&mut self) -> bool {
        match self.spot {
            Spot::Off { .. } => false,
            Spot::On { x: 0, y } => {
                self.spot = Spot::Off { row: y };
                true
            }
            Spot::On { x, y } => {
                self.spot = Spot::On { x: x - 1, y };
                true
            }
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.spot {
            Spot::Off { row } => {
                self.spot = Spot::On { x: 0, y: row };
                true
            }
            Spot::On { x, .. } if x + 1 >= BOARD_WIDTH => false,
            Spot::On { x, y } => {
                self.spot = Spot::On { x: x + 1, y };
                true
            }
        }
    }

    pub fn move_up(&mut self) -> bool {
        match self.spot {
            Spot::Off { .. } | Spot::On { y: 0, .. } => false,
            Spot::On { x, y } => {
                self.spot = Spot::On { x, y: y - 1 };
                true
            }
        }
    }

    pub fn move_down(&mut self) -> bool {
        match self.spot {
            Spot::Off { .. } => false,
            Spot::On { y, .. } if y + 1 >= BOARD_HEIGHT => false,
            Spot::On { x, y } => {
                self.spot = Spot::On { x, y: y + 1 };
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: u8, y: u8) -> Hand {
        Hand::on_board(3, x, y)
    }

    #[test]
    fn starts_off_board() {
        let hand = Hand::new(3);
        assert!(!hand.is_onboard());
        assert_eq!(hand.position(), None);
        assert_eq!(hand.code(), 3);
    }

    #[test]
    fn left_from_column_zero_leaves_the_board() {
        let mut hand = at(0, 4);
        assert!(hand.move_left());
        assert_eq!(hand.spot(), Spot::Off { row: 4 });
    }

    #[test]
    fn right_from_off_board_returns_to_the_same_row() {
        let mut hand = at(0, 4);
        hand.move_left();
        assert!(hand.move_right());
        assert_eq!(hand.position(), Some((0, 4)));
    }

    #[test]
    fn vertical_moves_do_nothing_off_board() {
        let mut hand = Hand::new(1);
        assert!(!hand.move_up());
        assert!(!hand.move_down());
        assert!(!hand.move_left());
        assert_eq!(hand, Hand::new(1));
    }

    #[test]
    fn moves_clamp_at_the_far_edges() {
        let mut hand = at(BOARD_WIDTH - 1, BOARD_HEIGHT - 1);
        assert_eq!(hand.position(), Some((BOARD_WIDTH - 1, BOARD_HEIGHT - 1)));
        assert!(!hand.move_right());
        assert!(!hand.move_down());
        assert_eq!(hand.position(), Some((BOARD_WIDTH - 1, BOARD_HEIGHT - 1)));

        let mut hand = at(2, 0);
        assert!(!hand.move_up());
        assert_eq!(hand.position(), Some((2, 0)));
    }

    #[test]
    fn random_walk_stays_on_the_board_or_leaves_by_the_left() {
        let mut hand = Hand::new(1);
        // Deterministic pseudo-random sequence of moves.
        let mut state = 7u32;
        for _ in 0..500 {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let before = hand.spot();
            match state >> 30 {
                0 => hand.move_left(),
                1 => hand.move_right(),
                2 => hand.move_up(),
                _ => hand.move_down(),
            };
            match hand.spot() {
                Spot::On { x, y } => assert!(x < BOARD_WIDTH && y < BOARD_HEIGHT),
                Spot::Off { .. } => {
                    assert!(matches!(before, Spot::On { x: 0, .. } | Spot::Off { .. }))
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn on_board_rejects_positions_off_the_board() {
        Hand::on_board(1, BOARD_WIDTH, 0);
    }

    #[test]
    fn is_here_only_on_board() {
        let hand = at(1, 2);
        assert!(hand.is_here(1, 2));
        assert!(!hand.is_here(2, 1));
        assert!(!Hand::new(1).is_here(0, 0));
    }
}
