//! Seeded shuffling for dealing a deck.
//!
//! A shuffled deck must still render in a deterministic order, so all
//! randomness flows from an explicit seed. Context streams are derived with
//! `FxHasher`, whose output is fixed, so a seed deals the same order on
//! every toolchain.
//!
//! ```
//! use memorize::core::DeckRng;
//!
//! let mut a = vec!["🚂", "🚑", "🚔", "🛳"];
//! let mut b = a.clone();
//!
//! DeckRng::new(7).shuffle(&mut a);
//! DeckRng::new(7).shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive a stream for one purpose (e.g. `"deal"`).
    ///
    /// Same seed and context always give the same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
