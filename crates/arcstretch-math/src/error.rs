//! Root-finding error types.

use thiserror::Error;

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors that can occur while solving for a root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The objective has the same sign at both bracket endpoints.
    #[error("root not bracketed: f({lower}) = {f_lower}, f({upper}) = {f_upper}")]
    RootNotBracketed {
        /// Lower bracket endpoint
        lower: f64,
        /// Upper bracket endpoint
        upper: f64,
        /// Objective value at `lower`
        f_lower: f64,
        /// Objective value at `upper`
        f_upper: f64,
    },

    /// The iteration cap was reached before the tolerance was met.
    #[error("no convergence after {iterations} iterations (last estimate {estimate})")]
    NoConvergence {
        /// Iterations performed
        iterations: usize,
        /// Last root estimate
        estimate: f64,
    },

    /// Tolerances or iteration cap are unusable.
    #[error("invalid solver options: {0}")]
    InvalidOptions(String),
}
