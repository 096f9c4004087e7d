//! Fisher–Yates shuffling.
//!
//! The swap loop is written out here rather than delegated to `rand`'s
//! sequence helpers: the index-draw order for a given seed is part of this
//! engine's reproducibility contract and must not drift with `rand`
//! internals.

use sampler_core::rng::{uniform, WordSource};

/// Shuffles the sequence in place.
///
/// Iterates from the last index down to 1, at each step drawing a uniform
/// index in [0, i] and swapping, which makes every permutation of the input
/// ordering equally likely. Sequences of length 0 or 1 are no-ops. No
/// allocation.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::WordSource;
/// use sampler_engine::sequence::shuffle::shuffle_in_place;
///
/// let mut source = WordSource::from_seed(42);
/// let mut items = vec![1, 2, 3, 4, 5];
/// shuffle_in_place(&mut source, &mut items);
///
/// let mut sorted = items.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_in_place<T>(source: &mut WordSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform::index(source, i + 1);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of the sequence, leaving the input untouched.
///
/// Same algorithm as [`shuffle_in_place`], applied to a duplicate.
pub fn shuffled_copy<T: Clone>(source: &mut WordSource, items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(source, &mut copy);
    copy
}

#[cfg(test)]
mod tests {
    use sampler_core::rng::{uniform, WordSource};

    use super::*;

    /// Length 0 and 1 are no-ops that consume no randomness.
    #[test]
    fn test_trivial_lengths_consume_nothing() {
        let mut source = WordSource::from_seed(5);
        let mut reference = WordSource::from_seed(5);

        let mut empty: Vec<i32> = vec![];
        shuffle_in_place(&mut source, &mut empty);
        let mut single = vec![9];
        shuffle_in_place(&mut source, &mut single);
        assert_eq!(single, vec![9]);

        assert_eq!(
            uniform::float(&mut source),
            uniform::float(&mut reference)
        );
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut source = WordSource::from_seed(42);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle_in_place(&mut source, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffled_copy_leaves_input_untouched() {
        let mut source = WordSource::from_seed(42);
        let items = vec!["a", "b", "c", "d", "e"];
        let copy = shuffled_copy(&mut source, &items);

        assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(copy.len(), items.len());
        let mut sorted = copy.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    /// The copy and in-place variants draw the same index sequence.
    #[test]
    fn test_copy_matches_in_place() {
        let mut source_a = WordSource::from_seed(7);
        let mut source_b = WordSource::from_seed(7);

        let items = vec![10, 20, 30, 40, 50, 60];
        let copy = shuffled_copy(&mut source_a, &items);

        let mut in_place = items.clone();
        shuffle_in_place(&mut source_b, &mut in_place);

        assert_eq!(copy, in_place);
    }
}
