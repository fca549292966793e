//! CSV loader for the incident table.
//!
//! Produces one [`IncidentRecord`] per row. Rows are never filtered here:
//! cells that fail to parse become `None` and flow through the pipeline as
//! missing values.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::IncidentRecord;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["CHARGE_LITERAL", "LATITUDE", "LONGITUDE", "REPDATETIME"];

#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file is missing or unreadable.
    #[error("cannot read incident file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was readable but does not look like an incident table.
    #[error("bad incident file {path}: {reason}")]
    Format { path: PathBuf, reason: String },
}

/// Reads the delimited incident table at `path` into memory.
///
/// Any columns beyond the required four are ignored. Numeric cells that fail
/// to parse become `None`; the timestamp column is kept as raw text for the
/// time normalizer.
///
/// # Errors
///
/// [`LoadError::File`] when the path cannot be opened, [`LoadError::Format`]
/// when a required column is absent or the CSV itself is malformed.
pub fn load_incidents(path: &Path) -> Result<Vec<IncidentRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = rdr
        .headers()
        .map_err(|e| format_error(path, format!("unreadable header row: {e}")))?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);

    let mut indices = [0usize; 4];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = column(name)
            .ok_or_else(|| format_error(path, format!("missing required column {name}")))?;
    }
    let [charge_idx, lat_idx, lon_idx, ts_idx] = indices;

    debug!(
        path = %path.display(),
        columns = headers.len(),
        "Header verified, reading rows"
    );

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| format_error(path, format!("malformed row: {e}")))?;

        let text = |idx: usize| {
            row.get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let number = |idx: usize| {
            row.get(idx)
                .and_then(|s| s.trim().parse::<f64>().ok())
        };

        records.push(IncidentRecord {
            charge: text(charge_idx),
            latitude: number(lat_idx),
            longitude: number(lon_idx),
            reported_raw: text(ts_idx),
            reported_at: None,
        });
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        "Incident table loaded"
    );

    Ok(records)
}

fn format_error(path: &Path, reason: String) -> LoadError {
    LoadError::Format {
        path: path.to_path_buf(),
        reason,
    }
}
