//! Coordinate extraction for the geospatial maps.
//!
//! Records missing either coordinate, or carrying one outside the valid
//! latitude/longitude range, are excluded from map output but never fatal.

use crate::model::IncidentRecord;

fn valid_coords(record: &IncidentRecord) -> Option<(f64, f64)> {
    let lat = record.latitude?;
    let lon = record.longitude?;
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Some((lat, lon))
    } else {
        None
    }
}

/// `(lat, lon)` pairs for the density heatmap.
pub fn heatmap_points(records: &[IncidentRecord]) -> Vec<(f64, f64)> {
    records.iter().filter_map(valid_coords).collect()
}

/// `(lat, lon, charge)` triples for the marker cluster map.
///
/// The label may be absent even when the coordinates are valid.
pub fn marker_points(records: &[IncidentRecord]) -> Vec<(f64, f64, Option<String>)> {
    records
        .iter()
        .filter_map(|r| valid_coords(r).map(|(lat, lon)| (lat, lon, r.charge.clone())))
        .collect()
}

/// Map center as the mean of all valid coordinate pairs.
///
/// The source tool centered on the modal latitude and modal longitude taken
/// independently, which can land far from any incident when the two modes
/// come from different rows; the centroid avoids that. `None` when no record
/// has valid coordinates.
pub fn map_center(records: &[IncidentRecord]) -> Option<(f64, f64)> {
    let points = heatmap_points(records);
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), (lat, lon)| (la + lat, lo + lon));

    Some((lat_sum / n, lon_sum / n))
}
