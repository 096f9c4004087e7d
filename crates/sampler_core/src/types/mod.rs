//! Shared types for the sampling toolkit.
//!
//! Currently this module holds the error taxonomy; every fallible operation
//! across both workspace crates reports failures through [`SampleError`].

pub mod error;

pub use error::{SampleError, SampleResult};
