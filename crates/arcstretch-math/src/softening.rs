//! Softening factor solver.
//!
//! The user-facing stretch factor `S` does not appear in the curve directly.
//! The curve is shaped by a softening factor `β` chosen so that
//!
//! ```text
//! S = β / asinh(β)
//! ```
//!
//! `β / asinh(β)` is strictly increasing on `(0, ∞)` and tends to 1 as
//! `β → 0`, so every `S > 1` has exactly one solution.
//!
//! # Supported range
//!
//! The root is searched in the fixed bracket [`BETA_MIN`, `BETA_MAX`]. This
//! limits solvable stretch factors to roughly `(1.1346, 8192.64)`; see
//! [`max_supported_stretch`]. Anything outside fails with
//! [`SolveError::RootNotBracketed`](crate::SolveError::RootNotBracketed).

use crate::{BrentOptions, SolveResult, brentq};

/// Lower end of the softening factor search bracket.
pub const BETA_MIN: f64 = 1.0;

/// Upper end of the softening factor search bracket.
pub const BETA_MAX: f64 = 100_000.0;

/// Stretch factor produced by a softening factor: `β / asinh(β)`.
///
/// # Example
///
/// ```rust
/// use arcstretch_math::stretch_ratio;
///
/// assert!((stretch_ratio(1.0) - 1.134_592_657).abs() < 1e-9);
/// ```
#[inline]
pub fn stretch_ratio(beta: f64) -> f64 {
    beta / beta.asinh()
}

/// Largest stretch factor the fixed bracket can resolve.
#[inline]
pub fn max_supported_stretch() -> f64 {
    stretch_ratio(BETA_MAX)
}

/// Solves the softening factor `β` for a stretch factor `S`.
///
/// # Example
///
/// ```rust
/// use arcstretch_math::{solve_softening, stretch_ratio};
///
/// let beta = solve_softening(10.0)?;
/// assert!((stretch_ratio(beta) - 10.0).abs() < 1e-6);
/// # Ok::<(), arcstretch_math::SolveError>(())
/// ```
///
/// # Errors
///
/// Returns [`SolveError::RootNotBracketed`](crate::SolveError::RootNotBracketed)
/// when `S` lies outside the supported range (including `S <= 1` and NaN).
pub fn solve_softening(stretch: f64) -> SolveResult<f64> {
    brentq(
        |beta| stretch_ratio(beta) - stretch,
        BETA_MIN,
        BETA_MAX,
        &BrentOptions::default(),
    )
}
