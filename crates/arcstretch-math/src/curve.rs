//! Arcsinh stretch curve.
//!
//! Maps normalized intensity `x ∈ [0, 1]` to `asinh(β·x) / asinh(β)`.
//! The curve fixes both endpoints (`0 → 0`, `1 → 1`) and lifts shadows more
//! strongly as `β` grows.
//!
//! # Precision
//!
//! Evaluated in `f64` with [`f64::asinh`], which stays accurate for small
//! arguments where `ln(z + sqrt(z² + 1))` would cancel.

use crate::{SolveResult, solve_softening};

/// Evaluates the arcsinh stretch for one sample.
///
/// # Example
///
/// ```rust
/// use arcstretch_math::arcsinh_stretch;
///
/// assert_eq!(arcsinh_stretch(0.0, 20.0), 0.0);
/// assert_eq!(arcsinh_stretch(1.0, 20.0), 1.0);
/// assert!(arcsinh_stretch(0.1, 20.0) > 0.1);
/// ```
#[inline]
pub fn arcsinh_stretch(x: f64, beta: f64) -> f64 {
    (beta * x).asinh() / beta.asinh()
}

/// A stretch curve with its softening factor already solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcsinhCurve {
    stretch: f64,
    beta: f64,
}

impl ArcsinhCurve {
    /// Solves `β` for the stretch factor and builds the curve.
    pub fn from_stretch(stretch: f64) -> SolveResult<Self> {
        let beta = solve_softening(stretch)?;
        Ok(Self { stretch, beta })
    }

    /// User-facing stretch factor `S`.
    #[inline]
    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    /// Solved softening factor `β`.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Evaluates the curve at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        arcsinh_stretch(x, self.beta)
    }

    /// Evaluates the curve at every domain sample.
    pub fn sample(&self, domain: &[f64]) -> Vec<f64> {
        domain.iter().map(|&x| self.eval(x)).collect()
    }
}
