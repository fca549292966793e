//! Console/log output and file persistence for rendered artifacts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::model::IncidentRecord;

/// Logs the first and last `n` records as a quick sanity sample.
pub fn log_sample(records: &[IncidentRecord], n: usize) {
    let head = records.iter().take(n).enumerate();
    for (i, r) in head {
        log_record(i, r);
    }

    if records.len() > n {
        let start = records.len().saturating_sub(n).max(n);
        for (i, r) in records.iter().enumerate().skip(start) {
            log_record(i, r);
        }
    }
}

fn log_record(index: usize, r: &IncidentRecord) {
    info!(
        row = index,
        charge = r.charge.as_deref().unwrap_or("-"),
        latitude = r.latitude,
        longitude = r.longitude,
        reported_at = r
            .reported_at
            .map(|t| t.to_string())
            .as_deref()
            .unwrap_or("-"),
        "Sample row"
    );
}

/// Logs the top-charge frequency table.
pub fn log_top_charges(top: &[(String, usize)]) {
    info!(entries = top.len(), "Most common charges");
    for (rank, (charge, count)) in top.iter().enumerate() {
        info!(rank = rank + 1, charge = %charge, count, "Charge");
    }
}

/// Writes one rendered artifact under `dir`, creating the directory first.
///
/// The file handle is scoped to this function, so it is released on every
/// exit path.
pub fn write_artifact(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;

    let path = dir.join(name);
    let mut file = fs::File::create(&path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("cannot write {}", path.display()))?;

    info!(path = %path.display(), bytes = contents.len(), "Artifact written");
    Ok(path)
}
