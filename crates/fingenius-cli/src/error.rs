//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Portfolio file is not valid JSON for a portfolio.
    #[error("Invalid portfolio file {path}: {reason}")]
    InvalidPortfolio {
        /// Offending path.
        path: PathBuf,
        /// Parse failure.
        reason: String,
    },

    /// Invalid numeric argument.
    #[error("Invalid {name}: {value}")]
    InvalidNumber {
        /// Argument name.
        name: &'static str,
        /// Value as given.
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data source could not be opened.
    #[error("Data source error: {0}")]
    Source(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
