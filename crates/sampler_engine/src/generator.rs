//! The stateful generator facade.

use sampler_core::rng::{uniform, NormalSampler, WordSource};
use sampler_core::{SampleError, SampleResult};
use tracing::debug;

use crate::sequence::{permutation, shuffle, weighted};

/// Stateful random generator for one logical worker.
///
/// A `Random` owns one word source and the Box–Muller spare cache, and routes
/// every sampling operation through them. Two generators constructed with the
/// same seed produce identical output for identical call sequences; the
/// effective seed is always queryable, so even entropy-seeded runs can be
/// replayed.
///
/// Construct one generator per logical worker. Generator state must not be
/// shared across concurrent workers without external synchronisation; the
/// process-wide instance behind [`crate::global::default_generator`] is the
/// one sanctioned shared generator.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::Random;
///
/// let mut a = Random::from_seed(12345);
/// let mut b = Random::from_seed(12345);
///
/// // Same seed produces identical streams
/// assert_eq!(a.float(), b.float());
/// assert_eq!(a.permutation(5).unwrap(), b.permutation(5).unwrap());
/// ```
#[derive(Debug)]
pub struct Random {
    /// The owned bit source.
    source: WordSource,
    /// Box–Muller state; cleared on every reseed.
    normal: NormalSampler,
}

impl Random {
    /// Creates a generator seeded from OS entropy.
    ///
    /// The drawn seed is retained and reported by [`Random::seed`], so any
    /// run can be reproduced after the fact.
    pub fn new() -> Self {
        let source = WordSource::from_entropy();
        debug!(seed = source.seed(), "initialised generator from entropy");
        Self {
            source,
            normal: NormalSampler::new(),
        }
    }

    /// Creates a generator with a deterministic seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_engine::Random;
    ///
    /// let rng = Random::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "initialised seeded generator");
        Self {
            source: WordSource::from_seed(seed),
            normal: NormalSampler::new(),
        }
    }

    /// Returns the effective seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    /// Resets the generator to the deterministic state for `seed`.
    ///
    /// Clears the cached normal spare alongside the word source, so the
    /// replayed stream is identical to that of a freshly constructed
    /// generator.
    pub fn reseed(&mut self, seed: u64) {
        self.source.reseed(seed);
        self.normal.reset();
        debug!(seed, "reseeded generator");
    }

    // ------------------------------------------------------------------
    // Scalar draws
    // ------------------------------------------------------------------

    /// Draws a uniform integer over the full `i64` range.
    #[inline]
    pub fn int(&mut self) -> i64 {
        uniform::int(&mut self.source)
    }

    /// Draws a uniform integer in [min, max).
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `min >= max`.
    #[inline]
    pub fn int_between(&mut self, min: i64, max: i64) -> SampleResult<i64> {
        uniform::int_between(&mut self.source, min, max)
    }

    /// Draws a uniform `f64` in [0, 1).
    #[inline]
    pub fn float(&mut self) -> f64 {
        uniform::float(&mut self.source)
    }

    /// Draws a uniform `f64` in [min, max).
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `min >= max` or a bound is
    /// non-finite.
    #[inline]
    pub fn float_between(&mut self, min: f64, max: f64) -> SampleResult<f64> {
        uniform::float_between(&mut self.source, min, max)
    }

    /// Draws a fair boolean.
    #[inline]
    pub fn boolean(&mut self) -> bool {
        uniform::boolean(&mut self.source)
    }

    /// Draws a boolean that is true with probability `p`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidProbability`] when `p` is outside [0, 1].
    #[inline]
    pub fn bernoulli(&mut self, p: f64) -> SampleResult<bool> {
        uniform::probability(&mut self.source, p)
    }

    // ------------------------------------------------------------------
    // Distributions
    // ------------------------------------------------------------------

    /// Draws from N(mean, std_dev²).
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidParameter`] when `std_dev` is negative or either
    /// argument is non-finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_engine::Random;
    ///
    /// let mut rng = Random::from_seed(42);
    /// let sample = rng.normal(100.0, 15.0).unwrap();
    /// assert!(sample.is_finite());
    /// assert!(rng.normal(0.0, -1.0).is_err());
    /// ```
    #[inline]
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> SampleResult<f64> {
        self.normal.sample(&mut self.source, mean, std_dev)
    }

    /// Draws from the log-normal distribution whose underlying normal has the
    /// given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Random::normal`].
    #[inline]
    pub fn log_normal(&mut self, mean: f64, std_dev: f64) -> SampleResult<f64> {
        Ok(self.normal(mean, std_dev)?.exp())
    }

    /// Draws the number of successes over `trials` Bernoulli trials with
    /// success probability `p`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidProbability`] when `p` is outside [0, 1],
    /// checked before any trial is drawn.
    pub fn binomial(&mut self, trials: u64, p: f64) -> SampleResult<u64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SampleError::InvalidProbability { p });
        }

        let mut successes = 0;
        for _ in 0..trials {
            if uniform::probability(&mut self.source, p)? {
                successes += 1;
            }
        }
        Ok(successes)
    }

    /// Draws the number of failures before the first success of a Bernoulli
    /// process with success probability `p`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidProbability`] when `p` is outside (0, 1]. Zero
    /// is rejected because the trial sequence would never terminate.
    pub fn geometric(&mut self, p: f64) -> SampleResult<u64> {
        if p.is_nan() || p <= 0.0 || p > 1.0 {
            return Err(SampleError::InvalidProbability { p });
        }

        let mut failures = 0;
        while uniform::float(&mut self.source) >= p {
            failures += 1;
        }
        Ok(failures)
    }

    /// Draws from the exponential distribution with the given rate, via the
    /// inverse transform on a uniform in (0, 1].
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidParameter`] when `rate` is not finite and
    /// positive.
    pub fn exponential(&mut self, rate: f64) -> SampleResult<f64> {
        if rate.is_nan() || rate <= 0.0 || rate.is_infinite() {
            return Err(SampleError::InvalidParameter(format!(
                "rate must be positive and finite, got {}",
                rate
            )));
        }

        let u = 1.0 - uniform::float(&mut self.source);
        Ok(-u.ln() / rate)
    }

    // ------------------------------------------------------------------
    // Batch draws
    // ------------------------------------------------------------------

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller. Empty
    /// buffers are a no-op.
    pub fn fill_float(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = uniform::float(&mut self.source);
        }
    }

    /// Fills the buffer with draws from N(mean, std_dev²).
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidParameter`] as for [`Random::normal`], raised
    /// before the first draw.
    pub fn fill_normal(&mut self, mean: f64, std_dev: f64, buffer: &mut [f64]) -> SampleResult<()> {
        for value in buffer.iter_mut() {
            *value = self.normal.sample(&mut self.source, mean, std_dev)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sequence operations
    // ------------------------------------------------------------------

    /// Picks a uniformly random element.
    ///
    /// # Errors
    ///
    /// [`SampleError::EmptyInput`] on an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_engine::Random;
    ///
    /// let mut rng = Random::from_seed(42);
    /// let routes = ["/a", "/b", "/c"];
    /// let route = rng.pick(&routes).unwrap();
    /// assert!(routes.contains(route));
    /// ```
    #[inline]
    pub fn pick<'a, T>(&mut self, candidates: &'a [T]) -> SampleResult<&'a T> {
        weighted::pick(&mut self.source, candidates)
    }

    /// Picks an element with probability proportional to its weight.
    ///
    /// # Errors
    ///
    /// [`SampleError::LengthMismatch`] when the sequences differ in length,
    /// [`SampleError::EmptyInput`] on empty sequences, and
    /// [`SampleError::InvalidWeight`] when a weight is negative or the total
    /// is not positive.
    #[inline]
    pub fn weighted_pick<'a, T>(
        &mut self,
        candidates: &'a [T],
        weights: &[f64],
    ) -> SampleResult<&'a T> {
        weighted::weighted_pick(&mut self.source, candidates, weights)
    }

    /// Shuffles the sequence in place with a Fisher–Yates pass.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle::shuffle_in_place(&mut self.source, items)
    }

    /// Returns a shuffled copy, leaving the input untouched.
    #[inline]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        shuffle::shuffled_copy(&mut self.source, items)
    }

    /// Returns a random permutation of the integers [0, n).
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidSize`] when `n` is negative.
    #[inline]
    pub fn permutation(&mut self, n: i64) -> SampleResult<Vec<usize>> {
        permutation::permutation(&mut self.source, n)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
