//! Normal-distribution sampling via the Box–Muller transform.

use std::f64::consts::TAU;

use super::{uniform, WordSource};
use crate::types::{SampleError, SampleResult};

/// Normal-distribution sampler with spare caching.
///
/// Each Box–Muller round consumes exactly two uniform draws and produces a
/// pair of independent standard normal variates. One is returned immediately;
/// the other is cached and returned by the next call without touching the
/// word source.
///
/// The cached spare is part of the generator's observable state: a facade
/// that reseeds its word source must call [`NormalSampler::reset`] at the
/// same time, otherwise the replayed sequence starts with a leftover variate
/// from the previous stream and the reproducibility guarantee breaks.
///
/// # Algorithm Reference
///
/// Box, G. E. P. & Muller, M. E. (1958). "A Note on the Generation of Random
/// Normal Deviates". Annals of Mathematical Statistics.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{NormalSampler, WordSource};
///
/// let mut source = WordSource::from_seed(42);
/// let mut normal = NormalSampler::new();
///
/// let value = normal.sample(&mut source, 10.0, 2.0).unwrap();
/// assert!(value.is_finite());
///
/// // Negative standard deviation is rejected before drawing
/// assert!(normal.sample(&mut source, 0.0, -1.0).is_err());
/// ```
#[derive(Debug, Default)]
pub struct NormalSampler {
    /// Second variate of the most recent Box–Muller pair, if unconsumed.
    spare: Option<f64>,
}

impl NormalSampler {
    /// Creates a sampler with no cached spare.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the cached spare, if any.
    ///
    /// Must accompany every reseed of the associated word source.
    #[inline]
    pub fn reset(&mut self) {
        self.spare = None;
    }

    /// Draws a standard normal variate (mean 0, standard deviation 1).
    ///
    /// Consumes two uniform draws on every other call; the intervening calls
    /// are served from the cached spare.
    pub fn sample_standard(&mut self, source: &mut WordSource) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // Map the first uniform into (0, 1] to keep ln away from zero.
        let u1 = 1.0 - uniform::float(source);
        let u2 = uniform::float(source);
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = TAU * u2;

        self.spare = Some(radius * angle.sin());
        radius * angle.cos()
    }

    /// Draws a variate from N(mean, std_dev²).
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidParameter`] when `mean` is non-finite or
    /// `std_dev` is negative, NaN, or non-finite. Validation happens before
    /// any randomness is consumed and before the spare is touched.
    pub fn sample(&mut self, source: &mut WordSource, mean: f64, std_dev: f64) -> SampleResult<f64> {
        if !mean.is_finite() {
            return Err(SampleError::InvalidParameter(format!(
                "mean must be finite, got {}",
                mean
            )));
        }
        if std_dev.is_nan() || std_dev < 0.0 || std_dev.is_infinite() {
            return Err(SampleError::InvalidParameter(format!(
                "standard deviation must be non-negative and finite, got {}",
                std_dev
            )));
        }

        Ok(mean + std_dev * self.sample_standard(source))
    }
}
