//! # arcstretch-math
//!
//! Numeric core for arcsinh contrast stretching.
//!
//! This crate provides the pieces needed to turn a user-facing stretch
//! factor into a sampled tone curve:
//!
//! - [`brentq`] - Bracketing root finder (Brent's method)
//! - [`solve_softening`] - Solves the softening factor `β` from a stretch factor `S`
//! - [`arcsinh_stretch`] / [`ArcsinhCurve`] - The stretch curve itself
//!
//! # Math
//!
//! The stretch factor and softening factor are related by
//!
//! ```text
//! S = β / asinh(β)
//! ```
//!
//! and the curve maps a normalized intensity `x` to
//!
//! ```text
//! y = asinh(β·x) / asinh(β)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use arcstretch_math::{ArcsinhCurve, stretch_ratio};
//!
//! let curve = ArcsinhCurve::from_stretch(5.0)?;
//! assert!((stretch_ratio(curve.beta()) - 5.0).abs() < 1e-6);
//! assert_eq!(curve.eval(0.0), 0.0);
//! assert_eq!(curve.eval(1.0), 1.0);
//! # Ok::<(), arcstretch_math::SolveError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `arcstretch-lut` - LUT generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod brent;
mod curve;
mod error;
mod softening;

pub use brent::{BrentOptions, brentq};
pub use curve::{ArcsinhCurve, arcsinh_stretch};
pub use error::{SolveError, SolveResult};
pub use softening::{BETA_MAX, BETA_MIN, max_supported_stretch, solve_softening, stretch_ratio};
