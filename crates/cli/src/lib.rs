use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use varpair_core::{AdmissionPolicy, CollectedFunction};

pub mod commands;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second install (e.g. from tests) is harmless; keep the first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Read a JSON array of collected functions from disk.
pub fn read_collected_functions(path: &Path) -> Result<Vec<CollectedFunction>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read collected functions at {}", path.display()))?;
    let functions: Vec<CollectedFunction> = serde_json::from_str(&body).with_context(|| {
        format!("Failed to parse collected functions JSON at {}", path.display())
    })?;
    tracing::debug!(count = functions.len(), path = %path.display(), "loaded collected functions");
    Ok(functions)
}

/// Write collected functions as a pretty-printed JSON array.
pub fn write_collected_functions(path: &Path, functions: &[CollectedFunction]) -> Result<()> {
    let body = serde_json::to_string_pretty(functions)
        .context("Failed to serialize collected functions")?;
    fs::write(path, body)
        .with_context(|| format!("Failed to write collected functions to {}", path.display()))?;
    Ok(())
}

/// Resolve the admission policy: the given file if any, otherwise defaults.
pub fn resolve_policy(path: Option<&PathBuf>) -> Result<AdmissionPolicy> {
    match path {
        Some(p) => AdmissionPolicy::load(p),
        None => Ok(AdmissionPolicy::default()),
    }
}
