//! LUT error types.

use std::path::PathBuf;

use arcstretch_math::SolveError;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT generation.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Stretch factor that cannot be used at all (NaN or infinite).
    #[error("invalid stretch factor: {0}")]
    InvalidStretch(f64),

    /// Softening factor could not be solved.
    #[error("failed to solve softening factor: {0}")]
    Solve(#[from] SolveError),

    /// Parse error when loading LUT files.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Malformed configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Output file or directory could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
