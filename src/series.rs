//! Timing-series loading for the benchmark comparator.
//!
//! Each render run appends one duration per line to a plain text file; a
//! benchmark condition is identified by device (`cpu`/`gpu`) and control-flow
//! strategy (`branch`/`pred`) plus the experiment name embedded in the file
//! name.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a whitespace/newline-delimited series of f64 samples.
pub fn load_series(path: &Path) -> Result<Vec<f64>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|e| {
                format!(
                    "Failed to parse '{token}' ({}:{}): {e}",
                    path.display(),
                    lineno + 1
                )
            })?;
            values.push(value);
        }
    }
    if values.is_empty() {
        return Err(format!("No samples found in {}", path.display()));
    }
    debug!("loaded {} samples from {}", values.len(), path.display());
    Ok(values)
}

/// The four timing series of one experiment.
#[derive(Clone, Debug)]
pub struct MeasurementSet {
    pub cpu_branch: Vec<f64>,
    pub cpu_pred: Vec<f64>,
    pub gpu_branch: Vec<f64>,
    pub gpu_pred: Vec<f64>,
}

impl MeasurementSet {
    /// Load all four conditions of experiment `name` from `dir`, following
    /// the `{device}_{strategy}_{name}.txt` naming convention.
    pub fn load(dir: &Path, name: &str) -> Result<Self, String> {
        Ok(Self {
            cpu_branch: load_series(&condition_path(dir, "cpu", "branch", name))?,
            cpu_pred: load_series(&condition_path(dir, "cpu", "pred", name))?,
            gpu_branch: load_series(&condition_path(dir, "gpu", "branch", name))?,
            gpu_pred: load_series(&condition_path(dir, "gpu", "pred", name))?,
        })
    }
}

fn condition_path(dir: &Path, device: &str, strategy: &str, name: &str) -> PathBuf {
    dir.join(format!("{device}_{strategy}_{name}.txt"))
}
