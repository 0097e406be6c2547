//! Adobe/Resolve .cube LUT format support.
//!
//! Only the 1D flavour is handled. Mono tables are written with the same
//! value replicated across R, G and B.
//!
//! # Format
//!
//! ```text
//! TITLE "Arcsinh_Stretch_5"
//! LUT_1D_SIZE 256
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Lines are always separated by `\n` and the last data line has no
//! terminator, so output is byte-identical on every platform.
//!
//! # Example
//!
//! ```rust,no_run
//! use arcstretch_lut::{Lut1D, cube};
//!
//! let lut = Lut1D::identity(256)?.with_title("Identity");
//! cube::write_1d("identity.cube", &lut)?;
//! let back = cube::read_1d("identity.cube")?;
//! assert_eq!(back.size(), 256);
//! # Ok::<(), arcstretch_lut::LutError>(())
//! ```

use crate::{Lut1D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Formats a float as the shortest decimal that round-trips, always with a
/// fractional part (`1.0`, not `1`).
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// Renders a 1D LUT as `.cube` text.
pub fn format_1d(lut: &Lut1D) -> String {
    let mut lines = Vec::with_capacity(lut.size() + 4);

    // Header
    if let Some(title) = &lut.title {
        lines.push(format!("TITLE \"{title}\""));
    }
    lines.push(format!("LUT_1D_SIZE {}", lut.size()));
    let min = format_value(lut.domain_min);
    let max = format_value(lut.domain_max);
    lines.push(format!("DOMAIN_MIN {min} {min} {min}"));
    lines.push(format!("DOMAIN_MAX {max} {max} {max}"));

    // Data
    for &v in &lut.values {
        let v = format_value(v);
        lines.push(format!("{v} {v} {v}"));
    }

    lines.join("\n")
}

/// Writes a 1D LUT to a .cube file, replacing any existing file.
pub fn write_1d<P: AsRef<Path>>(path: P, lut: &Lut1D) -> LutResult<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| LutError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_1d(lut).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}

/// Reads a 1D LUT from a .cube file.
pub fn read_1d<P: AsRef<Path>>(path: P) -> LutResult<Lut1D> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    parse_1d(reader)
}

/// Parses a 1D LUT from a reader.
///
/// Per-channel tables are rejected: every data line must repeat one value.
pub fn parse_1d<R: BufRead>(reader: R) -> LutResult<Lut1D> {
    let mut title: Option<String> = None;
    let mut size: Option<usize> = None;
    let mut domain_min = [0.0_f64; 3];
    let mut domain_max = [1.0_f64; 3];
    let mut data: Vec<f64> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = Some(rest.trim().trim_matches('"').to_string());
        } else if line.starts_with("LUT_1D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_3D_SIZE") {
            return Err(LutError::ParseError("expected 1D LUT, found 3D".into()));
        } else if line.starts_with("DOMAIN_MIN") {
            domain_min = parse_domain(line)?;
        } else if line.starts_with("DOMAIN_MAX") {
            domain_max = parse_domain(line)?;
        } else {
            let [r, g, b] = parse_rgb(line)?;
            if r != g || r != b {
                let msg = format!("per-channel entries not supported: {line}");
                return Err(LutError::ParseError(msg));
            }
            data.push(r);
        }
    }

    let Some(size) = size else {
        return Err(LutError::ParseError("missing LUT_1D_SIZE".into()));
    };

    if data.len() != size {
        let msg = format!("expected {size} entries, found {}", data.len());
        return Err(LutError::ParseError(msg));
    }

    let mut lut = Lut1D::from_data(data, domain_min[0], domain_max[0])?;
    lut.title = title;
    Ok(lut)
}

// Helper functions

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::ParseError("invalid size line".into()));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::ParseError("invalid size value".into()))
}

fn parse_domain(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(LutError::ParseError("invalid domain line".into()));
    }
    Ok([
        parse_float(parts[1], "domain R")?,
        parse_float(parts[2], "domain G")?,
        parse_float(parts[3], "domain B")?,
    ])
}

fn parse_rgb(line: &str) -> LutResult<[f64; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(LutError::ParseError(format!("invalid RGB line: {line}")));
    }
    Ok([
        parse_float(parts[0], "R value")?,
        parse_float(parts[1], "G value")?,
        parse_float(parts[2], "B value")?,
    ])
}

fn parse_float(token: &str, what: &str) -> LutResult<f64> {
    token
        .parse()
        .map_err(|_| LutError::ParseError(format!("invalid {what}")))
}
