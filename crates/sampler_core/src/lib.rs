//! # sampler_core: Foundation Layer of the Sampling Toolkit
//!
//! ## Foundation Layer Role
//!
//! sampler_core is the bottom layer of the two-crate workspace, providing:
//! - The seedable bit source (`rng::WordSource`)
//! - Scalar uniform draws: integers, floats, booleans (`rng::uniform`)
//! - Normal-distribution sampling via the Box–Muller transform
//!   (`rng::NormalSampler`)
//! - The validation-error taxonomy (`types::SampleError`)
//!
//! The generator facade, sequence operations (shuffle, weighted selection,
//! permutations), and the process-wide default generator live one layer up in
//! `sampler_engine`.
//!
//! ## Minimal Dependency Principle
//!
//! The foundation layer depends only on:
//! - rand: bit generation (`StdRng`), seeding, and bias-free range draws
//! - thiserror: structured error types
//! - serde: serialisation of error values (optional)
//!
//! ## Reproducibility
//!
//! Every source of randomness in this crate is seedable, and two sources
//! constructed with the same seed produce bit-identical sequences for the
//! same call sequence. Validation always happens before any randomness is
//! consumed, so a failed call never perturbs generator state.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{uniform, NormalSampler, WordSource};
//!
//! let mut source = WordSource::from_seed(42);
//!
//! // Scalar uniform draws
//! let u = uniform::float(&mut source);
//! assert!(u >= 0.0 && u < 1.0);
//! let roll = uniform::int_between(&mut source, 1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! // Normal draws (two uniforms per Box–Muller round, spare cached)
//! let mut normal = NormalSampler::new();
//! let z = normal.sample(&mut source, 0.0, 1.0).unwrap();
//! assert!(z.is_finite());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod types;

pub use types::{SampleError, SampleResult};
