//! Table generation: solve, sample, write.

use std::fs;
use std::path::{Path, PathBuf};

use arcstretch_math::ArcsinhCurve;
use tracing::{debug, info, trace};

use crate::{GeneratorConfig, Lut1D, LutError, LutResult, cube, sample_domain};

/// A table written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLut {
    /// User-facing stretch factor
    pub stretch: f64,
    /// Solved softening factor
    pub beta: f64,
    /// Written file
    pub path: PathBuf,
}

/// `TITLE` of the table for stretch factor `S`, e.g. `Arcsinh_Stretch_5`.
pub fn lut_title(stretch: f64) -> String {
    format!("Arcsinh_Stretch_{stretch}")
}

/// File name of the table for stretch factor `S`, e.g.
/// `lut_arcsinh_stretch_5.cube`.
pub fn lut_file_name(stretch: f64) -> String {
    format!("lut_arcsinh_stretch_{stretch}.cube")
}

/// Solves the curve for `stretch` and samples it over `domain`.
pub fn build_lut(stretch: f64, domain: &[f64]) -> LutResult<Lut1D> {
    let curve = ArcsinhCurve::from_stretch(stretch)?;
    sample_lut(&curve, domain)
}

fn sample_lut(curve: &ArcsinhCurve, domain: &[f64]) -> LutResult<Lut1D> {
    trace!(
        stretch = curve.stretch(),
        samples = domain.len(),
        "generate::sample_lut"
    );
    debug!(
        stretch = curve.stretch(),
        beta = curve.beta(),
        "Solved softening factor"
    );

    let lut = Lut1D::from_data(curve.sample(domain), 0.0, 1.0)?;
    Ok(lut.with_title(lut_title(curve.stretch())))
}

/// Builds the table for `stretch` and writes it into `output_dir`.
///
/// An existing file with the same name is overwritten.
pub fn generate_lut(stretch: f64, domain: &[f64], output_dir: &Path) -> LutResult<GeneratedLut> {
    let curve = ArcsinhCurve::from_stretch(stretch)?;
    let lut = sample_lut(&curve, domain)?;

    let path = output_dir.join(lut_file_name(stretch));
    cube::write_1d(&path, &lut)?;
    info!(stretch, beta = curve.beta(), path = %path.display(), "Wrote LUT");

    Ok(GeneratedLut {
        stretch,
        beta: curve.beta(),
        path,
    })
}

/// Generates every table listed in `config`, in order.
///
/// The domain is sampled once and shared. The first failure aborts the run;
/// tables already written stay on disk.
pub fn generate_all(config: &GeneratorConfig) -> LutResult<Vec<GeneratedLut>> {
    trace!(?config, "generate::generate_all");
    config.validate()?;

    let dir = &config.output_dir;
    let dir_err = |source: std::io::Error| LutError::Write {
        path: dir.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(dir_err)?;
    let domain = sample_domain(config.samples)?;

    info!(
        tables = config.user_stretches.len(),
        samples = config.samples,
        dir = %config.output_dir.display(),
        "Generating arcsinh LUTs"
    );

    let mut written = Vec::with_capacity(config.user_stretches.len());
    for &stretch in &config.user_stretches {
        written.push(generate_lut(stretch, &domain, &config.output_dir)?);
    }

    info!(written = written.len(), "LUT generation complete");
    Ok(written)
}
