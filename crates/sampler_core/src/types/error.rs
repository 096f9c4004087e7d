//! Error types for structured error handling.
//!
//! Every sampling operation validates its arguments synchronously, before any
//! randomness is consumed, and reports precondition violations through
//! [`SampleError`]. There are no retries and no degraded modes: invalid input
//! is always a hard error, and a failed call never advances generator state.

use thiserror::Error;

/// Categorised sampling errors.
///
/// One variant per precondition the engine checks. Range and probability
/// violations carry the offending values; the remaining variants carry
/// whatever context the caller needs to correct the input.
///
/// # Examples
/// ```
/// use sampler_core::SampleError;
///
/// let err = SampleError::InvalidProbability { p: 1.5 };
/// assert_eq!(format!("{}", err), "invalid probability: 1.5 is outside [0, 1]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleError {
    /// Range bounds are reversed, equal, or not finite.
    ///
    /// Integer bounds are widened to `f64` for reporting; the display is
    /// exact for every range a sampling call can meaningfully receive.
    #[error("invalid range: min {min} must be below max {max}")]
    InvalidRange {
        /// Lower bound of the offending range.
        min: f64,
        /// Upper bound of the offending range.
        max: f64,
    },

    /// A probability argument was outside [0, 1].
    #[error("invalid probability: {p} is outside [0, 1]")]
    InvalidProbability {
        /// The offending probability.
        p: f64,
    },

    /// A distribution parameter was outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Candidate and weight sequences differ in length.
    #[error("length mismatch: {candidates} candidates but {weights} weights")]
    LengthMismatch {
        /// Number of candidate elements supplied.
        candidates: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A weight was negative or non-finite, or the total weight was not
    /// positive.
    #[error("invalid weights: {0}")]
    InvalidWeight(String),

    /// A selection was requested from an empty sequence.
    #[error("cannot sample from an empty sequence")]
    EmptyInput,

    /// A permutation size was negative or does not fit the address space.
    #[error("invalid permutation size: {n}")]
    InvalidSize {
        /// The requested size.
        n: i64,
    },
}

/// Convenience alias used by every fallible operation in the toolkit.
pub type SampleResult<T> = Result<T, SampleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = SampleError::InvalidRange { min: 5.0, max: 2.0 };
        assert_eq!(format!("{}", err), "invalid range: min 5 must be below max 2");
    }

    #[test]
    fn test_invalid_probability_display() {
        let err = SampleError::InvalidProbability { p: -0.25 };
        assert_eq!(
            format!("{}", err),
            "invalid probability: -0.25 is outside [0, 1]"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = SampleError::InvalidParameter("rate must be positive, got 0".to_string());
        assert_eq!(
            format!("{}", err),
            "invalid parameter: rate must be positive, got 0"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = SampleError::LengthMismatch {
            candidates: 2,
            weights: 1,
        };
        assert_eq!(
            format!("{}", err),
            "length mismatch: 2 candidates but 1 weights"
        );
    }

    #[test]
    fn test_invalid_weight_display() {
        let err = SampleError::InvalidWeight("total weight must be positive, got 0".to_string());
        assert_eq!(
            format!("{}", err),
            "invalid weights: total weight must be positive, got 0"
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            format!("{}", SampleError::EmptyInput),
            "cannot sample from an empty sequence"
        );
    }

    #[test]
    fn test_invalid_size_display() {
        let err = SampleError::InvalidSize { n: -3 };
        assert_eq!(format!("{}", err), "invalid permutation size: -3");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SampleError::EmptyInput;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SampleError::InvalidRange { min: 1.0, max: 1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // Serde tests (feature-gated)
    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_sample_error_serde_roundtrip() {
            let err = SampleError::LengthMismatch {
                candidates: 3,
                weights: 5,
            };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: SampleError = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
