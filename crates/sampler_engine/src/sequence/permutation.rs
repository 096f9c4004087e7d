//! Random permutations of the integers [0, n).

use sampler_core::rng::WordSource;
use sampler_core::{SampleError, SampleResult};

use super::shuffle;

/// Returns a random permutation of the integers [0, n).
///
/// Builds the identity sequence and shuffles it in place, so the result is
/// uniform over all n! orderings. Successive calls against the same source
/// advance its state and yield independent permutations. `n` is signed
/// because the engine's callers are scripting hosts with signed integers;
/// the negative-size precondition is representable and checked.
///
/// # Errors
///
/// Returns [`SampleError::InvalidSize`] when `n` is negative (or does not
/// fit the address space), before any randomness is consumed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::WordSource;
/// use sampler_engine::sequence::permutation::permutation;
///
/// let mut source = WordSource::from_seed(42);
/// let mut perm = permutation(&mut source, 5).unwrap();
/// perm.sort_unstable();
/// assert_eq!(perm, vec![0, 1, 2, 3, 4]);
///
/// assert_eq!(permutation(&mut source, 0).unwrap(), Vec::<usize>::new());
/// assert!(permutation(&mut source, -1).is_err());
/// ```
pub fn permutation(source: &mut WordSource, n: i64) -> SampleResult<Vec<usize>> {
    let count = usize::try_from(n).map_err(|_| SampleError::InvalidSize { n })?;

    let mut values: Vec<usize> = (0..count).collect();
    shuffle::shuffle_in_place(source, &mut values);
    Ok(values)
}
