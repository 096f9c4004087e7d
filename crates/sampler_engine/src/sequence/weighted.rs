//! Uniform and weight-proportional element selection.

use sampler_core::rng::{uniform, WordSource};
use sampler_core::{SampleError, SampleResult};

/// Picks a uniformly random element of `candidates`.
///
/// Implemented as a direct index draw rather than a degenerate weighted
/// selection, so the common case stays O(1) with no table build.
///
/// # Errors
///
/// Returns [`SampleError::EmptyInput`] on an empty sequence, before any
/// randomness is consumed.
pub fn pick<'a, T>(source: &mut WordSource, candidates: &'a [T]) -> SampleResult<&'a T> {
    if candidates.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    Ok(&candidates[uniform::index(source, candidates.len())])
}

/// Picks an element of `candidates` with probability proportional to its
/// weight.
///
/// Builds a prefix-sum table over the weights, draws a uniform float in
/// [0, total), and binary-searches for the first candidate whose cumulative
/// weight exceeds the draw. The intervals are half-open, so a draw landing
/// exactly on a cumulative boundary selects the next candidate and
/// zero-weight candidates are never chosen.
///
/// O(n) to build the table, O(log n) to select.
///
/// # Errors
///
/// All raised before any randomness is consumed:
/// - [`SampleError::LengthMismatch`] when `candidates` and `weights` differ
///   in length
/// - [`SampleError::EmptyInput`] when `candidates` is empty
/// - [`SampleError::InvalidWeight`] when any weight is negative or
///   non-finite, or the total weight is not positive and finite
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::WordSource;
/// use sampler_engine::sequence::weighted::weighted_pick;
///
/// let mut source = WordSource::from_seed(42);
/// let endpoints = ["/login", "/search", "/checkout"];
///
/// let picked = weighted_pick(&mut source, &endpoints, &[0.1, 0.8, 0.1]).unwrap();
/// assert!(endpoints.contains(picked));
///
/// assert!(weighted_pick(&mut source, &endpoints, &[1.0]).is_err());
/// ```
pub fn weighted_pick<'a, T>(
    source: &mut WordSource,
    candidates: &'a [T],
    weights: &[f64],
) -> SampleResult<&'a T> {
    if candidates.len() != weights.len() {
        return Err(SampleError::LengthMismatch {
            candidates: candidates.len(),
            weights: weights.len(),
        });
    }
    if candidates.is_empty() {
        return Err(SampleError::EmptyInput);
    }

    let mut prefix = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight.is_nan() || weight < 0.0 || weight.is_infinite() {
            return Err(SampleError::InvalidWeight(format!(
                "weight {} at index {} must be finite and non-negative",
                weight, index
            )));
        }
        total += weight;
        prefix.push(total);
    }
    if total <= 0.0 || total.is_infinite() {
        return Err(SampleError::InvalidWeight(format!(
            "total weight must be positive and finite, got {}",
            total
        )));
    }

    let draw = uniform::float(source) * total;
    let position = prefix.partition_point(|&cumulative| cumulative <= draw);

    // A unit draw below 1.0 can still round up to the exact total for large
    // totals; clamp so the draw stays inside the table.
    Ok(&candidates[position.min(candidates.len() - 1)])
}
