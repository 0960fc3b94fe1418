//! Round module - board, hand and dice for one session
//!
//! Every player action goes through [`Round::apply_action`]. Actions that
//! cannot apply (moving past an edge, placing off the board or onto an
//! occupied cell) are no-ops and report `false`.

use crate::book::TileBook;
use crate::city::City;
use crate::hand::Hand;
use crate::rng::Dice;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Round {
    book: TileBook,
    city: City,
    hand: Hand,
    dice: Dice,
}

impl Round {
    /// Start a round on an empty city with a freshly drawn hand.
    pub fn new(book: TileBook, mut dice: Dice) -> Self {
        let hand = Hand::new(dice.draw_tile(&book));
        tracing::info!(tiles = book.len(), first = hand.code(), "round started");
        Self {
            book,
            city: City::new(),
            hand,
            dice,
        }
    }

    /// Resume a round from an existing city and hand.
    ///
    /// # Panics
    ///
    /// If the hand or any placed cell holds a tile that is not drawable from `book`.
    pub fn with_state(book: TileBook, dice: Dice, city: City, hand: Hand) -> Self {
        let drawable = book.drawable();
        assert!(
            drawable.contains(&hand.code()),
            "hand tile {} not drawable from a {}-tile book",
            hand.code(),
            book.len()
        );
        if let Some((x, y, id)) = city.tiles().find(|(_, _, id)| !drawable.contains(id)) {
            panic!("city tile {id} at ({x}, {y}) not drawable from a {}-tile book", book.len());
        }
        Self {
            book,
            city,
            hand,
            dice,
        }
    }

    pub fn book(&self) -> &TileBook {
        &self.book
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Apply a player action. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::MoveLeft => self.hand.move_left(),
            GameAction::MoveRight => self.hand.move_right(),
            GameAction::MoveUp => self.hand.move_up(),
            GameAction::MoveDown => self.hand.move_down(),
            GameAction::Place => self.place(),
            GameAction::Redraw => {
                self.redraw();
                true
            }
        };
        tracing::trace!(action = action.as_str(), changed, "action applied");
        changed
    }

    /// Put the held tile on the cell under the hand, then draw a new one.
    ///
    /// Does nothing while off the board or over an occupied cell.
    pub fn place(&mut self) -> bool {
        let Some((x, y)) = self.hand.position() else {
            return false;
        };
        if !self.city.place(x, y, self.hand.code()) {
            tracing::debug!(x, y, "cell occupied; tile kept in hand");
            return false;
        }
        tracing::info!(x, y, tile = self.hand.code(), "tile placed");
        self.redraw();
        true
    }

    /// Replace the hand with a new random tile, off the board.
    pub fn redraw(&mut self) {
        self.hand = Hand::new(self.dice.draw_tile(&self.book));
        tracing::debug!(tile = self.hand.code(), "new tile drawn");
    }
}
