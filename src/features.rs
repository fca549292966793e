//! Derives time features from normalized timestamps.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::model::{DerivedFeatures, IncidentRecord, TimeBucket};

/// Computes the per-record time features from a parsed timestamp.
pub fn derive_features(ts: NaiveDateTime) -> DerivedFeatures {
    let hour = ts.hour();
    DerivedFeatures {
        hour,
        weekday: ts.weekday().num_days_from_monday(),
        month: ts.month(),
        bucket: TimeBucket::from_hour(hour),
    }
}

/// Features for one record, absent when its timestamp never parsed.
pub fn features(record: &IncidentRecord) -> Option<DerivedFeatures> {
    record.reported_at.map(derive_features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeparse::parse_timestamp;

    #[test]
    fn test_round_trip_known_timestamp() {
        // 2025-03-18 is a Tuesday
        let ts = parse_timestamp("2025-03-18 14:30:00").unwrap();
        let f = derive_features(ts);

        assert_eq!(f.hour, 14);
        assert_eq!(f.weekday, 1);
        assert_eq!(f.month, 3);
        assert_eq!(f.bucket, TimeBucket::Midday);
    }

    #[test]
    fn test_monday_is_zero() {
        let ts = parse_timestamp("2025-01-06 00:00:00").unwrap();
        assert_eq!(derive_features(ts).weekday, 0);
    }

    #[test]
    fn test_null_timestamp_has_no_features() {
        let record = IncidentRecord {
            charge: Some("THEFT".to_string()),
            ..Default::default()
        };
        assert!(features(&record).is_none());
    }
}
