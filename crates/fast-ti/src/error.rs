//! Error types for fast-ti.
//!
//! Every fallible operation in the crate returns [`Result`], and every failure
//! is a precondition failure detected before any computation starts. Numeric
//! degeneracies (division by zero, flat windows) are not errors: they surface
//! as `NaN`, `±Infinity` or the sentinel documented by the indicator.

use thiserror::Error;

/// The main error type for fast-ti operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required input sequence is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// Parallel input sequences do not have matching lengths.
    ///
    /// OHLCV bars, two-asset inputs and paired indicator outputs are aligned
    /// by index, so every sequence must have the length the operation expects.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Which sequences disagree and their lengths.
        description: String,
    },

    /// The input is shorter than the fixed minimum an operation needs.
    ///
    /// Rolling operations return an empty result when the window is longer than
    /// the data; this error is reserved for operations whose definition needs
    /// a minimum amount of history (e.g. the directional movement system).
    #[error("insufficient data for {indicator}: required {required} elements, got {actual}")]
    InsufficientData {
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
        /// The operation that rejected the input.
        indicator: &'static str,
    },

    /// A period parameter is invalid.
    ///
    /// Raised for a zero period, a short period not below its long period, or
    /// a sub-period that does not fit inside the evaluated window.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period configuration value is invalid.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

impl Error {
    /// Builds a [`Error::LengthMismatch`] naming two sequences and their lengths.
    #[must_use]
    pub fn length_mismatch(left: &str, left_len: usize, right: &str, right_len: usize) -> Self {
        Self::LengthMismatch {
            description: format!("{left} has {left_len} elements but {right} has {right_len}"),
        }
    }
}

/// Convenience type alias for Results using the fast-ti Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_error() {
        assert_eq!(Error::EmptyInput.to_string(), "empty input: no data provided");
    }

    #[test]
    fn test_length_mismatch_error() {
        let err = Error::length_mismatch("high", 5, "low", 4);
        assert_eq!(
            err.to_string(),
            "length mismatch: high has 5 elements but low has 4"
        );
    }

    #[test]
    fn test_insufficient_data_error() {
        let err = Error::InsufficientData {
            required: 9,
            actual: 6,
            indicator: "directional_movement_system",
        };
        assert_eq!(
            err.to_string(),
            "insufficient data for directional_movement_system: required 9 elements, got 6"
        );
    }

    #[test]
    fn test_invalid_period_error() {
        let err = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid period 0: period must be at least 1");
    }

    #[test]
    fn test_invalid_parameter_error() {
        let err = Error::InvalidParameter {
            name: "af_start",
            reason: "must not exceed af_max",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `af_start`: must not exceed af_max"
        );
    }

    #[test]
    fn test_numeric_conversion_error() {
        let err = Error::NumericConversion {
            context: "usize to series element",
        };
        assert_eq!(
            err.to_string(),
            "numeric conversion failed: usize to series element"
        );
    }

    #[test]
    fn test_error_equality_and_clone() {
        let err = Error::length_mismatch("a", 3, "b", 2);
        assert_eq!(err.clone(), err);
        assert_ne!(err, Error::EmptyInput);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        accepts_std_error(Error::EmptyInput);
    }
}
