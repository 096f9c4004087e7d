//! The process-wide default generator.
//!
//! Module-level convenience functions (`shuffle`, `shuffled`, `permutation`)
//! operate against a single shared [`Random`], created lazily from entropy on
//! first use and alive for the rest of the process.
//!
//! ## Synchronisation
//!
//! The default generator is the one generator that may be reached from more
//! than one worker, and the mutex around it is the serialisation point the
//! engine's concurrency model requires. Workers that need reproducible,
//! uncoupled streams should construct their own seeded [`Random`] instead of
//! going through these functions: draws through the default generator
//! interleave across whatever threads touch it, so per-worker sequences are
//! not reproducible even though each individual draw stays well-formed.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use sampler_core::SampleResult;

use crate::Random;

static DEFAULT_GENERATOR: OnceLock<Mutex<Random>> = OnceLock::new();

/// Returns the process-wide default generator.
///
/// Created from OS entropy on first access; the effective seed can be read
/// through the guard for logging. Prefer dependency-injected per-worker
/// generators wherever the host permits; this accessor exists for the hosts
/// that cannot thread one through.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::default_generator;
///
/// let seed = default_generator().lock().unwrap().seed();
/// let replay_seed = default_generator().lock().unwrap().seed();
/// assert_eq!(seed, replay_seed);
/// ```
pub fn default_generator() -> &'static Mutex<Random> {
    DEFAULT_GENERATOR.get_or_init(|| Mutex::new(Random::new()))
}

/// Locks the default generator, recovering from poisoning.
///
/// A panic elsewhere while holding the lock leaves the generator state
/// intact and usable, so the poison flag is cleared rather than propagated.
fn lock_default() -> MutexGuard<'static, Random> {
    default_generator()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Shuffles the sequence in place using the default generator.
///
/// # Examples
///
/// ```rust
/// let mut items = vec![1, 2, 3, 4, 5];
/// sampler_engine::shuffle(&mut items);
///
/// let mut sorted = items.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(items: &mut [T]) {
    lock_default().shuffle(items)
}

/// Returns a shuffled copy of the sequence using the default generator,
/// leaving the input untouched.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    lock_default().shuffled(items)
}

/// Returns a random permutation of the integers [0, n) using the default
/// generator.
///
/// # Errors
///
/// Returns [`sampler_core::SampleError::InvalidSize`] when `n` is negative.
pub fn permutation(n: i64) -> SampleResult<Vec<usize>> {
    lock_default().permutation(n)
}
