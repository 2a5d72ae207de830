//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!   (the deal and the computer's picks never share a stream)
//! - **Injectable**: a game owns its RNG; nothing reads a global source
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deal = rng.for_context("deal");
//! let mut agent = rng.for_context("agent");
//!
//! // Separate streams from the same seed
//! let cards: Vec<u16> = (0..52).collect();
//! assert_ne!(deal.sample(&cards, 8), agent.sample(&cards, 8));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Odd 64-bit golden-ratio constant used to mix context names into seeds.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG for deals and computer play.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
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

    /// Create an RNG from an OS-provided seed.
    ///
    /// The seed is kept so the game can still be recorded and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// independent of platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mixed = context.bytes().fold(self.seed, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(GOLDEN_GAMMA).rotate_left(31)
        });
        Self::new(mixed)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose `amount` distinct elements uniformly at random.
    ///
    /// Returns fewer than `amount` elements if the slice is shorter.
    pub fn sample<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice.choose_multiple(&mut self.inner, amount).copied().collect()
    }
}
