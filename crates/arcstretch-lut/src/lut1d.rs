//! 1-dimensional lookup table.
//!
//! A stretch curve is channel-agnostic, so the table stores a single curve
//! that is applied identically to R, G and B.

use crate::{LutError, LutResult};

/// A mono 1-dimensional lookup table.
///
/// # Structure
///
/// - `size` entries, sampled evenly over `[domain_min, domain_max]`
/// - One curve shared by all channels
/// - Linear interpolation between entries
///
/// # Example
///
/// ```rust
/// use arcstretch_lut::Lut1D;
///
/// let lut = Lut1D::from_data(vec![0.0, 0.25, 1.0], 0.0, 1.0)?;
/// assert_eq!(lut.size(), 3);
/// assert!((lut.apply(0.25) - 0.125).abs() < 1e-12);
/// # Ok::<(), arcstretch_lut::LutError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    /// LUT entries
    pub values: Vec<f64>,
    /// Input domain minimum
    pub domain_min: f64,
    /// Input domain maximum
    pub domain_max: f64,
    /// Optional `TITLE` written to file headers
    pub title: Option<String>,
}

impl Lut1D {
    /// Creates an identity (pass-through) 1D LUT.
    pub fn identity(size: usize) -> LutResult<Self> {
        if size < 2 {
            let msg = format!("LUT size must be >= 2, got {size}");
            return Err(LutError::InvalidSize(msg));
        }
        let values = (0..size).map(|i| i as f64 / (size - 1) as f64).collect();
        Self::from_data(values, 0.0, 1.0)
    }

    /// Creates a LUT from raw data.
    ///
    /// # Arguments
    ///
    /// * `data` - LUT entries
    /// * `domain_min` - Input domain minimum
    /// * `domain_max` - Input domain maximum
    pub fn from_data(data: Vec<f64>, domain_min: f64, domain_max: f64) -> LutResult<Self> {
        if data.is_empty() {
            return Err(LutError::InvalidSize("LUT size must be > 0".into()));
        }
        Ok(Self {
            values: data,
            domain_min,
            domain_max,
            title: None,
        })
    }

    /// Sets the table title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the number of entries in the LUT.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Applies the LUT to a single value using linear interpolation.
    ///
    /// Inputs outside the domain are clamped to the edge entries.
    pub fn apply(&self, value: f64) -> f64 {
        let size = self.values.len();
        if size == 1 {
            return self.values[0];
        }

        // Normalize to [0, 1] based on domain
        let range = self.domain_max - self.domain_min;
        let t = if range.abs() < 1e-12 {
            0.0
        } else {
            ((value - self.domain_min) / range).clamp(0.0, 1.0)
        };

        let idx_f = t * (size - 1) as f64;
        let idx0 = (idx_f.floor() as usize).min(size - 1);
        let idx1 = (idx0 + 1).min(size - 1);
        let frac = idx_f - idx0 as f64;

        self.values[idx0] * (1.0 - frac) + self.values[idx1] * frac
    }

    /// Applies the LUT to RGB values, same curve on every channel.
    pub fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.apply(c))
    }

    /// Returns true if entries never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let lut = Lut1D::identity(256).unwrap();
        assert_abs_diff_eq!(lut.apply(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lut.apply(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(lut.apply(1.0), 1.0, epsilon = 1e-12);
        assert!(lut.is_monotonic());
    }

    #[test]
    fn test_clamps_outside_domain() {
        let lut = Lut1D::from_data(vec![0.1, 0.6, 0.9], 0.0, 1.0).unwrap();
        assert_eq!(lut.apply(-1.0), 0.1);
        assert_eq!(lut.apply(2.0), 0.9);
    }

    #[test]
    fn test_rgb() {
        let lut = Lut1D::identity(256).unwrap();
        let result = lut.apply_rgb([0.5, 0.3, 0.8]);
        assert_abs_diff_eq!(result[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(result[1], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(result[2], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_not_monotonic() {
        let values = vec![0.0, 0.7, 0.5, 1.0];
        let lut = Lut1D::from_data(values, 0.0, 1.0).unwrap();
        assert!(!lut.is_monotonic());
    }

    #[test]
    fn test_invalid_size() {
        assert!(Lut1D::from_data(Vec::new(), 0.0, 1.0).is_err());
        assert!(Lut1D::identity(1).is_err());
    }

    #[test]
    fn test_title() {
        let lut = Lut1D::identity(2).unwrap().with_title("Curve");
        assert_eq!(lut.title.as_deref(), Some("Curve"));
    }
}
