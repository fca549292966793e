//! One-dimensional frequency tables.

use std::collections::HashMap;

use chrono::Datelike;

use crate::features::features;
use crate::model::{DAY_NAMES, IncidentRecord};

/// Counts charge labels and returns the `n` most frequent, descending.
///
/// Ties keep first-occurrence order (stable sort). Records with a null
/// timestamp still count here as long as their charge label is populated.
pub fn top_charges(records: &[IncidentRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if let Some(charge) = record.charge.as_deref() {
            match index.get(charge).copied() {
                Some(i) => counts[i].1 += 1,
                None => {
                    index.insert(charge, counts.len());
                    counts.push((charge.to_string(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Incident counts per hour of day. Always exactly 24 entries, zero-filled.
pub fn counts_by_hour(records: &[IncidentRecord]) -> Vec<(u32, usize)> {
    let mut counts = [0usize; 24];
    for f in records.iter().filter_map(features) {
        counts[f.hour as usize] += 1;
    }
    (0..24).map(|h| (h as u32, counts[h])).collect()
}

/// Incident counts per weekday, Monday through Sunday. Always 7 entries.
pub fn counts_by_day_of_week(records: &[IncidentRecord]) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 7];
    for f in records.iter().filter_map(features) {
        counts[f.weekday as usize] += 1;
    }
    DAY_NAMES.iter().zip(counts).map(|(d, c)| (*d, c)).collect()
}

/// Incident counts per calendar month over the observed span.
///
/// Keys are `(year, month)` pairs in chronological order. Months inside the
/// span with no incidents appear with a zero count; records with a null
/// timestamp are excluded. Empty when nothing has a parsed timestamp.
pub fn counts_per_month(records: &[IncidentRecord]) -> Vec<((i32, u32), usize)> {
    let mut counts: HashMap<(i32, u32), usize> = HashMap::new();

    for ts in records.iter().filter_map(|r| r.reported_at) {
        *counts.entry((ts.year(), ts.month())).or_default() += 1;
    }

    let Some(&first) = counts.keys().min() else {
        return Vec::new();
    };
    let &last = counts.keys().max().unwrap();

    let mut series = Vec::new();
    let mut key = first;
    loop {
        series.push((key, counts.get(&key).copied().unwrap_or(0)));
        if key == last {
            break;
        }
        key = next_month(key);
    }
    series
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeparse::parse_timestamp;

    fn record(charge: &str, ts: &str) -> IncidentRecord {
        IncidentRecord {
            charge: Some(charge.to_string()),
            reported_at: parse_timestamp(ts),
            ..Default::default()
        }
    }

    #[test]
    fn test_top_charges_descending_with_stable_ties() {
        let records = vec![
            record("THEFT", "2025-01-06 08:00:00"),
            record("THEFT", "2025-01-07 08:00:00"),
            record("ASSAULT", "2025-01-08 08:00:00"),
            record("BURGLARY", "2025-01-09 08:00:00"),
        ];

        let top = top_charges(&records, 10);
        assert_eq!(top[0], ("THEFT".to_string(), 2));
        // ASSAULT and BURGLARY tie at 1; ASSAULT occurred first
        assert_eq!(top[1].0, "ASSAULT");
        assert_eq!(top[2].0, "BURGLARY");
    }

    #[test]
    fn test_top_charges_limits_to_n() {
        let records: Vec<_> = (0..20)
            .map(|i| record(&format!("CHARGE_{i}"), "2025-01-06 08:00:00"))
            .collect();
        assert_eq!(top_charges(&records, 5).len(), 5);
    }

    #[test]
    fn test_top_charges_counts_null_timestamp_rows() {
        let records = vec![IncidentRecord {
            charge: Some("VANDALISM".to_string()),
            reported_raw: Some("not-a-date".to_string()),
            ..Default::default()
        }];
        assert_eq!(top_charges(&records, 10), vec![("VANDALISM".to_string(), 1)]);
    }

    #[test]
    fn test_counts_by_hour_full_domain_and_total() {
        let records = vec![
            record("A", "2025-01-06 08:15:00"),
            record("B", "2025-01-06 08:45:00"),
            record("C", "2025-01-06 22:00:00"),
            IncidentRecord::default(), // no timestamp
        ];

        let counts = counts_by_hour(&records);
        assert_eq!(counts.len(), 24);
        assert_eq!(counts[0].0, 0);
        assert_eq!(counts[23].0, 23);
        assert_eq!(counts[8].1, 2);
        assert_eq!(counts[22].1, 1);

        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_counts_by_day_monday_first() {
        // 2025-01-06 Monday, 2025-01-12 Sunday
        let records = vec![
            record("A", "2025-01-06 08:00:00"),
            record("B", "2025-01-12 08:00:00"),
        ];

        let counts = counts_by_day_of_week(&records);
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], ("Monday", 1));
        assert_eq!(counts[6], ("Sunday", 1));
        assert_eq!(counts[2].1, 0);
    }

    #[test]
    fn test_counts_per_month_fills_gap_months() {
        let records = vec![
            record("A", "2025-01-06 08:00:00"),
            record("B", "2025-04-01 08:00:00"),
        ];

        let series = counts_per_month(&records);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0], ((2025, 1), 1));
        assert_eq!(series[1], ((2025, 2), 0));
        assert_eq!(series[2], ((2025, 3), 0));
        assert_eq!(series[3], ((2025, 4), 1));
    }

    #[test]
    fn test_counts_per_month_crosses_year_boundary() {
        let records = vec![
            record("A", "2024-12-15 08:00:00"),
            record("B", "2025-01-15 08:00:00"),
        ];

        let series = counts_per_month(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, (2024, 12));
        assert_eq!(series[1].0, (2025, 1));
    }

    #[test]
    fn test_counts_per_month_empty_without_timestamps() {
        let records = vec![IncidentRecord::default()];
        assert!(counts_per_month(&records).is_empty());
    }
}
