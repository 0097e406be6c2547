//! Input domain sampling.
//!
//! The domain is `n - 1` evenly spaced values `i / (n - 1)` starting at 0,
//! followed by an exact `1.0`. The last value is appended rather than
//! computed so both table edges are exact.

use crate::{LutError, LutResult};

/// Builds the normalized input samples for an `n`-entry table.
///
/// # Example
///
/// ```rust
/// use arcstretch_lut::sample_domain;
///
/// let domain = sample_domain(5)?;
/// assert_eq!(domain, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// # Ok::<(), arcstretch_lut::LutError>(())
/// ```
pub fn sample_domain(n: usize) -> LutResult<Vec<f64>> {
    if n < 2 {
        let msg = format!("LUT size must be >= 2, got {n}");
        return Err(LutError::InvalidSize(msg));
    }
    let step = 1.0 / (n - 1) as f64;
    let mut domain: Vec<f64> = (0..n - 1).map(|i| i as f64 * step).collect();
    domain.push(1.0);
    Ok(domain)
}
