//! Generator configuration.
//!
//! All fields have defaults, so an empty YAML document (or no file at all)
//! reproduces the stock set of tables.
//!
//! ```yaml
//! user_stretches: [5, 10, 15]
//! samples: 1024
//! output_dir: out/luts
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LutError, LutResult};

/// Stretch factors generated when none are configured.
pub const DEFAULT_STRETCHES: [f64; 12] = [
    5.0, 10.0, 15.0, 25.0, 40.0, 65.0, 105.0, 170.0, 275.0, 445.0, 720.0, 1165.0,
];

/// Entries per table.
pub const DEFAULT_SAMPLES: usize = 256;

/// Directory that receives the `.cube` files.
pub const DEFAULT_OUTPUT_DIR: &str = "./luts";

/// Which tables to generate and where to put them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Stretch factors, one table each, in generation order.
    pub user_stretches: Vec<f64>,
    /// Entries per table.
    pub samples: usize,
    /// Output directory.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            user_stretches: DEFAULT_STRETCHES.to_vec(),
            samples: DEFAULT_SAMPLES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> LutResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> LutResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Rejects settings that can never produce a table.
    ///
    /// Finite stretch factors outside the solver's range are left for the
    /// solver to report.
    pub fn validate(&self) -> LutResult<()> {
        if self.samples < 2 {
            let msg = format!("samples must be >= 2, got {}", self.samples);
            return Err(LutError::InvalidSize(msg));
        }
        if let Some(&bad) = self.user_stretches.iter().find(|s| !s.is_finite()) {
            return Err(LutError::InvalidStretch(bad));
        }
        Ok(())
    }
}
