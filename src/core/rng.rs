//! Deterministic random number generation for deal/draft/setup phases.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Shared**: One generator per session; it is not reentrant, callers on
//!   multiple threads must synchronize access externally
//!
//! ## Shuffling
//!
//! [`GameRng::swap_shuffle`] is deliberately *not* a Fisher-Yates shuffle.
//! The session protocol shuffles by performing `n` random pairwise swaps
//! (two independent uniform indices per round), and peers must agree on the
//! resulting order, so the historical procedure is kept bit-for-bit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by the random-selection routines.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle a slice with `n` random pairwise swaps.
    ///
    /// For each of the `n` rounds two independent uniform indices are drawn
    /// and their slots swapped. The output distribution differs from a
    /// uniform permutation; see the module docs for why this is kept.
    pub fn swap_shuffle<T>(&mut self, slice: &mut [T]) {
        let n = slice.len();
        if n == 0 {
            return;
        }
        for _ in 0..n {
            let r1 = self.inner.gen_range(0..n);
            let r2 = self.inner.gen_range(0..n);
            slice.swap(r1, r2);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
