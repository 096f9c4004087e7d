//! Seedable pseudo-random bit source.
//!
//! This module provides [`WordSource`], the single point all other samplers
//! draw randomness from. It wraps [`rand::rngs::StdRng`] and retains the
//! effective seed so any run can be reproduced after the fact.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Seedable pseudo-random word generator.
///
/// `WordSource` is the bit source of the toolkit: it produces pseudo-random
/// 64-bit words, and everything else (uniform ranges, normal variates,
/// shuffles) is derived from those words. The effective seed is always
/// retained, including for entropy-seeded sources, so a host can log it and
/// replay the exact sequence later.
///
/// The wrapped generator is `StdRng` (ChaCha12 in this `rand` release), which
/// has a documented period and uniformity far beyond what repeated sampling
/// per worker iteration requires. Sequence identity across `rand` major
/// versions or other language ports is not promised.
///
/// # Concurrency
///
/// A `WordSource` belongs to exactly one logical worker. The advance-and-read
/// step is not atomic, so sharing one source across concurrent workers
/// without external synchronisation corrupts the sequence. See the engine
/// layer's default generator for the one sanctioned shared instance.
///
/// # Examples
///
/// ```rust
/// use rand::RngCore;
/// use sampler_core::rng::WordSource;
///
/// let mut a = WordSource::from_seed(7);
/// let mut b = WordSource::from_seed(7);
///
/// // Same seed produces identical words
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug)]
pub struct WordSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (retained for reproducibility).
    seed: u64,
}

impl WordSource {
    /// Creates a source initialised with the given seed.
    ///
    /// The same seed always produces the same word sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::WordSource;
    ///
    /// let source = WordSource::from_seed(12345);
    /// assert_eq!(source.seed(), 12345);
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded from OS entropy.
    ///
    /// The seed is drawn from the operating system first and then used for a
    /// normal deterministic initialisation, so [`WordSource::seed`] reports a
    /// value that reproduces the sequence exactly.
    pub fn from_entropy() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Returns the effective seed.
    ///
    /// Useful for logging and for replaying a run that was seeded from
    /// entropy.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Resets the source to the deterministic state for `seed`.
    ///
    /// After reseeding, the source produces the same sequence as a fresh
    /// `WordSource::from_seed(seed)`. Callers holding derived sampler state
    /// (such as a cached normal spare) must reset it alongside this call.
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.inner = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }
}

impl RngCore for WordSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
