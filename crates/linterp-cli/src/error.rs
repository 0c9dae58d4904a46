//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use linterp_math::MathError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value in a comma-separated list is not a number.
    #[error("Invalid number in {field}: '{value}'")]
    InvalidNumber {
        /// Argument the value came from.
        field: &'static str,
        /// Offending text.
        value: String,
    },

    /// Neither a table file nor inline breakpoints were given.
    #[error("No table given: use --table <FILE> or --domain and --range")]
    MissingTable,

    /// Invalid sweep step.
    #[error("Invalid step: {0}. Must be positive.")]
    InvalidStep(f32),

    /// Sweep would produce too many queries.
    #[error("Sweep too large: more than {max} points")]
    SweepTooLarge {
        /// Maximum number of points.
        max: usize,
    },

    /// The table was rejected by the interpolation library.
    #[error(transparent)]
    Table(#[from] MathError),

    /// Table file could not be parsed.
    #[error("Invalid table file {}: {source}", path.display())]
    TableFile {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        source: toml::de::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
