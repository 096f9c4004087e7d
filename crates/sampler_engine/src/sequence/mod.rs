//! Sequence-level sampling operations.
//!
//! Everything here consumes randomness through a [`sampler_core::rng::WordSource`]
//! supplied by the caller, so the operations compose into a generator's
//! single reproducible stream.
//!
//! ## Module Structure
//!
//! - [`shuffle`]: in-place and copy-producing Fisher–Yates shuffles
//! - [`weighted`]: uniform and weight-proportional element selection
//! - [`permutation`]: random permutations of [0, n)

pub mod permutation;
pub mod shuffle;
pub mod weighted;
