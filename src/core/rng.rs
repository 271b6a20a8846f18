//! Deterministic randomness for match setup.
//!
//! Ability resolution is fully deterministic; the only randomness in this
//! crate is the setup-time deck shuffle. `MatchRng` wraps a seeded
//! ChaCha8 stream so the same seed always deals the same decks, which
//! keeps scenario tests and replays reproducible.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used when dealing decks at match setup.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
