//! # Random Generation Primitives
//!
//! This module provides the seedable bit source and the scalar samplers
//! derived from it. Everything the engine layer does (shuffles, weighted
//! selection, permutations) bottoms out in the draws defined here.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every source is seedable; the same seed and call
//!   sequence produce bit-identical output
//! - **Fail before drawing**: argument validation happens before any
//!   randomness is consumed, so a rejected call never perturbs state
//! - **No internal locking**: a source belongs to exactly one logical
//!   worker; confinement is the caller's concern, not this module's
//! - **Static dispatch**: concrete types throughout, no `Box<dyn Trait>` in
//!   hot paths
//!
//! ## Module Structure
//!
//! - [`WordSource`]: seedable pseudo-random word generator with seed tracking
//! - [`uniform`]: uniform integers, floats, and booleans over a `WordSource`
//! - [`NormalSampler`]: Box–Muller normal sampling with spare caching
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{uniform, WordSource};
//!
//! let mut source = WordSource::from_seed(12345);
//! let u = uniform::float(&mut source);
//! assert!(u >= 0.0 && u < 1.0);
//!
//! // Same seed, same sequence
//! let mut replay = WordSource::from_seed(12345);
//! assert_eq!(uniform::float(&mut replay), u);
//! ```

mod normal;
pub mod uniform;
mod word;

// Public re-exports
pub use normal::NormalSampler;
pub use word::WordSource;
