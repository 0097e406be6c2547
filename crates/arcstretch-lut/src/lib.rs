//! # arcstretch-lut
//!
//! Arcsinh contrast-stretch lookup tables.
//!
//! This crate samples the curves from `arcstretch-math` into 1D LUTs and
//! writes them as Adobe/Resolve `.cube` files, one per stretch factor.
//!
//! # Pipeline
//!
//! For every stretch factor `S` in a [`GeneratorConfig`]:
//!
//! 1. Solve the softening factor `β`
//! 2. Evaluate the curve over the shared [`sample_domain`]
//! 3. Write `lut_arcsinh_stretch_<S>.cube`
//!
//! # Usage
//!
//! ```rust,no_run
//! use arcstretch_lut::{GeneratorConfig, generate_all};
//!
//! let written = generate_all(&GeneratorConfig::default())?;
//! for lut in &written {
//!     println!("S={} beta={:.4} -> {}", lut.stretch, lut.beta, lut.path.display());
//! }
//! # Ok::<(), arcstretch_lut::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`arcstretch-math`] - Solver and curve
//! - [`serde`] / [`serde_yaml`] - Configuration
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Logging
//!
//! # Used By
//!
//! - `arcstretch-cli` - The `arcstretch-luts` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
pub mod cube;
mod domain;
mod error;
mod generate;
mod lut1d;

pub use config::{DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLES, DEFAULT_STRETCHES, GeneratorConfig};
pub use cube::{parse_1d as parse_cube_1d, read_1d as read_cube_1d, write_1d as write_cube_1d};
pub use domain::sample_domain;
pub use error::{LutError, LutResult};
pub use generate::{GeneratedLut, build_lut, generate_all, generate_lut, lut_file_name, lut_title};
pub use lut1d::Lut1D;
