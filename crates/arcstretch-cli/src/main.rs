//! arcstretch-luts - Arcsinh contrast-stretch LUT generator
//!
//! Writes one `.cube` table per configured stretch factor. Settings come
//! from `arcsinh_luts.yaml` in the working directory when present, and from
//! built-in defaults otherwise. Log verbosity follows `RUST_LOG`.

use anyhow::{Context, Result};
use arcstretch_lut::{GeneratorConfig, generate_all};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Optional config file, looked up in the working directory.
const CONFIG_FILE: &str = "arcsinh_luts.yaml";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(Path::new(CONFIG_FILE))?;

    let dir = config.output_dir.display();
    let written = generate_all(&config)
        .with_context(|| format!("Failed to generate LUTs in {dir}"))?;

    for lut in &written {
        println!("{}", lut.path.display());
    }
    println!("Generated {} LUTs", written.len());

    Ok(())
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    if !path.is_file() {
        info!("No {} found, using defaults", path.display());
        return Ok(GeneratorConfig::default());
    }
    let config = GeneratorConfig::load(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    info!(config = %path.display(), "Loaded config");
    Ok(config)
}
