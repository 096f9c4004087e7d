//! Uniform scalar draws over a [`WordSource`].
//!
//! Integer ranges use `rand`'s widening-multiply sampler, which rejects the
//! biased tail instead of taking a modulus, so every value in a half-open
//! range is equally likely regardless of how the range divides the word
//! space. Floats carry the full 53-bit mantissa.

use rand::Rng;

use super::WordSource;
use crate::types::{SampleError, SampleResult};

/// Draws a uniform `f64` in [0, 1) with full mantissa precision.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform, WordSource};
///
/// let mut source = WordSource::from_seed(42);
/// let value = uniform::float(&mut source);
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[inline]
pub fn float(source: &mut WordSource) -> f64 {
    source.gen()
}

/// Draws a uniform `f64` in [min, max).
///
/// # Errors
///
/// Returns [`SampleError::InvalidRange`] when `min >= max`, when either bound
/// is non-finite, or when the span `max - min` overflows. Validation happens
/// before any randomness is consumed.
pub fn float_between(source: &mut WordSource, min: f64, max: f64) -> SampleResult<f64> {
    if min >= max || !(max - min).is_finite() {
        return Err(SampleError::InvalidRange { min, max });
    }
    Ok(source.gen_range(min..max))
}

/// Draws a uniform integer over the full `i64` range.
///
/// This is the no-bounds default; use [`int_between`] for a bounded draw.
#[inline]
pub fn int(source: &mut WordSource) -> i64 {
    source.gen()
}

/// Draws a uniform integer in [min, max).
///
/// # Errors
///
/// Returns [`SampleError::InvalidRange`] when `min >= max`, before any
/// randomness is consumed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform, WordSource};
///
/// let mut source = WordSource::from_seed(42);
/// let roll = uniform::int_between(&mut source, 1, 7).unwrap();
/// assert!((1..7).contains(&roll));
///
/// assert!(uniform::int_between(&mut source, 3, 3).is_err());
/// ```
pub fn int_between(source: &mut WordSource, min: i64, max: i64) -> SampleResult<i64> {
    if min >= max {
        return Err(SampleError::InvalidRange {
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(source.gen_range(min..max))
}

/// Draws a uniform index in [0, n).
///
/// Internal building block for element selection and shuffling; callers
/// guarantee `n > 0`.
#[inline]
pub fn index(source: &mut WordSource, n: usize) -> usize {
    debug_assert!(n > 0, "index draw requires a non-empty range");
    source.gen_range(0..n)
}

/// Draws a fair boolean.
#[inline]
pub fn boolean(source: &mut WordSource) -> bool {
    source.gen()
}

/// Draws a boolean that is true with probability `p`.
///
/// # Errors
///
/// Returns [`SampleError::InvalidProbability`] when `p` is outside [0, 1]
/// (NaN included), before any randomness is consumed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform, WordSource};
///
/// let mut source = WordSource::from_seed(42);
/// assert!(!uniform::probability(&mut source, 0.0).unwrap());
/// assert!(uniform::probability(&mut source, 1.0).unwrap());
/// assert!(uniform::probability(&mut source, 1.5).is_err());
/// ```
pub fn probability(source: &mut WordSource, p: f64) -> SampleResult<bool> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SampleError::InvalidProbability { p });
    }
    Ok(source.gen_bool(p))
}
