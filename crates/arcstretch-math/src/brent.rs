//! Brent's bracketing root finder.
//!
//! Combines inverse quadratic interpolation, secant steps and bisection.
//! Convergence is guaranteed as long as the starting bracket contains a
//! sign change of a continuous function.
//!
//! # Example
//!
//! ```rust
//! use arcstretch_math::{brentq, BrentOptions};
//!
//! let root = brentq(|x| x * x - 2.0, 0.0, 2.0, &BrentOptions::default())?;
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
//! # Ok::<(), arcstretch_math::SolveError>(())
//! ```

use crate::{SolveError, SolveResult};

/// Stopping criteria for [`brentq`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentOptions {
    /// Absolute tolerance on the root.
    pub xtol: f64,
    /// Relative tolerance on the root.
    pub rtol: f64,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iter: 100,
        }
    }
}

impl BrentOptions {
    fn validate(&self) -> SolveResult<()> {
        if self.xtol.is_nan() || self.xtol <= 0.0 {
            let msg = format!("xtol must be > 0, got {}", self.xtol);
            return Err(SolveError::InvalidOptions(msg));
        }
        if self.rtol.is_nan() || self.rtol < 0.0 {
            let msg = format!("rtol must be >= 0, got {}", self.rtol);
            return Err(SolveError::InvalidOptions(msg));
        }
        if self.max_iter == 0 {
            return Err(SolveError::InvalidOptions("max_iter must be > 0".into()));
        }
        Ok(())
    }
}

/// Finds a root of `f` in `[a, b]` using Brent's method.
///
/// `f(a)` and `f(b)` must have opposite signs. If either endpoint is an
/// exact root it is returned without iterating.
///
/// # Errors
///
/// - [`SolveError::RootNotBracketed`] if the endpoint signs match
/// - [`SolveError::NoConvergence`] if `max_iter` is exhausted
/// - [`SolveError::InvalidOptions`] for unusable tolerances
pub fn brentq<F>(f: F, a: f64, b: f64, opts: &BrentOptions) -> SolveResult<f64>
where
    F: Fn(f64) -> f64,
{
    opts.validate()?;

    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = f(xpre);
    let mut fcur = f(xcur);

    if fpre == 0.0 {
        return Ok(xpre);
    }
    if fcur == 0.0 {
        return Ok(xcur);
    }
    if fpre.is_sign_negative() == fcur.is_sign_negative() {
        return Err(SolveError::RootNotBracketed {
            lower: a,
            upper: b,
            f_lower: fpre,
            f_upper: fcur,
        });
    }

    // Contrapoint: f(xblk) always has the opposite sign of f(xcur).
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for _ in 0..opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (opts.xtol + opts.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }

    Err(SolveError::NoConvergence {
        iterations: opts.max_iter,
        estimate: xcur,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn solve<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> SolveResult<f64> {
        brentq(f, a, b, &BrentOptions::default())
    }

    #[test]
    fn test_sqrt2() {
        let root = solve(|x| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-11);
    }

    #[test]
    fn test_reversed_bracket() {
        let root = solve(|x| x * x - 2.0, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-11);
    }

    #[test]
    fn test_cubic() {
        // x^3 - 2x - 5 has a single real root near 2.0946
        let root = solve(|x| x * x * x - 2.0 * x - 5.0, 2.0, 3.0).unwrap();
        assert_abs_diff_eq!(root, 2.094_551_481_542_327, epsilon = 1e-10);
    }

    #[test]
    fn test_transcendental() {
        let root = solve(|x| x.cos() - x, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(root.cos(), root, epsilon = 1e-11);
    }

    #[test]
    fn test_endpoint_root() {
        assert_eq!(solve(|x| x - 1.0, 1.0, 5.0).unwrap(), 1.0);
        assert_eq!(solve(|x| x - 5.0, 1.0, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_not_bracketed() {
        let err = solve(|x| x * x + 1.0, -1.0, 1.0).unwrap_err();
        let expected = SolveError::RootNotBracketed {
            lower: -1.0,
            upper: 1.0,
            f_lower: 2.0,
            f_upper: 2.0,
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn test_nan_objective_not_bracketed() {
        let err = solve(|_| f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, SolveError::RootNotBracketed { .. }));
    }

    #[test]
    fn test_no_convergence() {
        let opts = BrentOptions {
            max_iter: 1,
            ..Default::default()
        };
        let err = brentq(|x| x * x - 2.0, 0.0, 2.0, &opts).unwrap_err();
        let is_capped = matches!(err, SolveError::NoConvergence { iterations: 1, .. });
        assert!(is_capped, "unexpected error: {err:?}");
    }

    #[test]
    fn test_invalid_options() {
        let opts = BrentOptions {
            xtol: 0.0,
            ..Default::default()
        };
        let err = brentq(|x| x, -1.0, 1.0, &opts).unwrap_err();
        assert!(matches!(err, SolveError::InvalidOptions(_)));

        let opts = BrentOptions {
            max_iter: 0,
            ..Default::default()
        };
        let err = brentq(|x| x, -1.0, 1.0, &opts).unwrap_err();
        assert!(matches!(err, SolveError::InvalidOptions(_)));
    }
}
