//! Error types for table interpolation.

use thiserror::Error;

/// A specialized Result type for interpolation operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while interpolating over a breakpoint table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The breakpoint table cannot be used as given.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an error for a table sequence that is too short.
    #[must_use]
    pub fn insufficient_data(which: &str, required: usize, actual: usize) -> Self {
        Self::invalid_argument(format!(
            "{which} should contain at least {required} values, got {actual}"
        ))
    }

    /// Creates an error for domain and range sequences of different length.
    #[must_use]
    pub fn length_mismatch(domain: usize, range: usize) -> Self {
        Self::invalid_argument(format!(
            "domain and range must have same length: {domain} vs {range}"
        ))
    }
}
