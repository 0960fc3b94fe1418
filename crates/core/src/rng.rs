//! RNG module - uniform tile draws
//!
//! The game seeds one [`Dice`] from the operating system at startup. Tests and
//! the `--seed` flag use a fixed seed instead so a whole session replays
//! identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::book::TileBook;
use crate::types::TileId;

#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// Seed from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic dice for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `low..=high`.
    ///
    /// # Panics
    ///
    /// If `low > high`.
    pub fn draw(&mut self, low: u64, high: u64) -> u64 {
        self.rng.random_range(low..=high)
    }

    /// A random drawable tile id from `book`; never the blank tile.
    pub fn draw_tile(&mut self, book: &TileBook) -> TileId {
        let ids = book.drawable();
        self.draw(*ids.start() as u64, *ids.end() as u64) as TileId
    }
}
