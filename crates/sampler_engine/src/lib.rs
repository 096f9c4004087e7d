//! # sampler_engine: Deterministic Sampling for Load-Testing Hosts
//!
//! ## Engine Layer Role
//!
//! sampler_engine is the top layer of the two-crate workspace, providing:
//! - The stateful generator facade (`Random`)
//! - Sequence operations: element picks, weighted selection, Fisher–Yates
//!   shuffles, and permutation generation (`sequence`)
//! - The process-wide default generator and its module-level convenience
//!   functions (`global`)
//!
//! The bit source and scalar samplers live one layer down in `sampler_core`.
//!
//! ## Worker Model
//!
//! The engine targets hosts that run many independent logical workers
//! (virtual users) concurrently. The supported pattern is **one `Random` per
//! worker**: generator state is never shared, every worker's stream is
//! reproducible from its own seed, and no sampling call blocks or performs
//! I/O. The default generator behind [`global::default_generator`] is the one
//! shared instance, serialised by its mutex.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_engine::Random;
//!
//! let mut rng = Random::from_seed(42);
//!
//! // Scalar draws
//! let roll = rng.int_between(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//! let latency = rng.normal(250.0, 40.0).unwrap();
//! assert!(latency.is_finite());
//!
//! // Sequence operations
//! let endpoints = ["/login", "/search", "/checkout"];
//! let hot = rng.weighted_pick(&endpoints, &[0.1, 0.8, 0.1]).unwrap();
//! assert!(endpoints.contains(hot));
//!
//! // Same seed, same stream
//! let mut replay = Random::from_seed(42);
//! assert_eq!(replay.int_between(1, 7).unwrap(), roll);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod generator;
pub mod global;
pub mod sequence;

pub use generator::Random;
pub use global::{default_generator, permutation, shuffle, shuffled};
pub use sampler_core::{SampleError, SampleResult};
