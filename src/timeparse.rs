//! Time normalizer: free-form timestamp text to `NaiveDateTime`.
//!
//! Parse failures degrade to `None` rather than aborting the run, so one
//! bad cell never costs the whole dataset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::model::IncidentRecord;

/// Timestamp layouts tried in order. Naive local time, no timezone handling.
static DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, extended to midnight.
static DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses one raw timestamp cell. Returns `None` on any failure.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Fills `reported_at` for every record from its raw timestamp text.
///
/// Records whose text fails to parse keep a null timestamp and are counted
/// at debug level; they stay in the dataset.
pub fn normalize(mut records: Vec<IncidentRecord>) -> Vec<IncidentRecord> {
    let mut failed = 0usize;

    for record in &mut records {
        record.reported_at = record.reported_raw.as_deref().and_then(parse_timestamp);
        if record.reported_raw.is_some() && record.reported_at.is_none() {
            failed += 1;
        }
    }

    if failed > 0 {
        debug!(failed, "Timestamps failed to parse, kept as null");
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso_datetime() {
        let dt = parse_timestamp("2025-03-18 14:30:00").unwrap();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 18);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_us_datetime() {
        let dt = parse_timestamp("03/18/2025 14:30:00").unwrap();
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_parse_date_only_extends_to_midnight() {
        let dt = parse_timestamp("2025-03-18").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn test_normalize_keeps_failed_rows() {
        let records = vec![
            IncidentRecord {
                reported_raw: Some("2025-03-18 14:30:00".to_string()),
                ..Default::default()
            },
            IncidentRecord {
                reported_raw: Some("not-a-date".to_string()),
                ..Default::default()
            },
            IncidentRecord::default(),
        ];

        let records = normalize(records);
        assert_eq!(records.len(), 3);
        assert!(records[0].reported_at.is_some());
        assert!(records[1].reported_at.is_none());
        assert!(records[2].reported_at.is_none());
    }
}
