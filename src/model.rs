//! Core data types shared by every pipeline stage.

use chrono::NaiveDateTime;
use std::fmt;

/// Weekday names indexed by Monday=0, matching the derived weekday index.
pub static DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One row of the source incident table.
///
/// Nothing is dropped at load time: a record with an unparseable timestamp
/// keeps `reported_at = None` and simply falls out of the time-based
/// aggregations downstream.
#[derive(Debug, Clone, Default)]
pub struct IncidentRecord {
    pub charge: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Raw timestamp text as it appeared in the source column.
    pub reported_raw: Option<String>,
    /// Parsed timestamp, filled in by the time normalizer.
    pub reported_at: Option<NaiveDateTime>,
}

/// Coarse time-of-day segment used for the monthly trend breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    Morning,
    Midday,
    Evening,
    LateNight,
}

impl TimeBucket {
    /// All buckets in presentation order.
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::Morning,
        TimeBucket::Midday,
        TimeBucket::Evening,
        TimeBucket::LateNight,
    ];

    /// Buckets an hour of day (0-23) into one of the four segments.
    ///
    /// Boundaries: [4,10) morning, [10,16) midday, [16,21) evening,
    /// everything else late night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            4..=9 => TimeBucket::Morning,
            10..=15 => TimeBucket::Midday,
            16..=20 => TimeBucket::Evening,
            _ => TimeBucket::LateNight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning (4-10am)",
            TimeBucket::Midday => "Midday (10-4pm)",
            TimeBucket::Evening => "Evening (4-9pm)",
            TimeBucket::LateNight => "Late Night (9pm-4am)",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-record time features, present only when the timestamp parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFeatures {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Weekday index, Monday=0 through Sunday=6.
    pub weekday: u32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub bucket: TimeBucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(TimeBucket::from_hour(3), TimeBucket::LateNight);
        assert_eq!(TimeBucket::from_hour(4), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(9), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(10), TimeBucket::Midday);
        assert_eq!(TimeBucket::from_hour(15), TimeBucket::Midday);
        assert_eq!(TimeBucket::from_hour(16), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(20), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(21), TimeBucket::LateNight);
        assert_eq!(TimeBucket::from_hour(0), TimeBucket::LateNight);
        assert_eq!(TimeBucket::from_hour(23), TimeBucket::LateNight);
    }

    #[test]
    fn test_every_hour_maps_to_exactly_one_bucket() {
        for hour in 0..24 {
            let bucket = TimeBucket::from_hour(hour);
            let matches = TimeBucket::ALL.iter().filter(|b| **b == bucket).count();
            assert_eq!(matches, 1, "hour {} should hit exactly one bucket", hour);
        }
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(TimeBucket::Morning.label(), "Morning (4-10am)");
        assert_eq!(TimeBucket::Midday.label(), "Midday (10-4pm)");
        assert_eq!(TimeBucket::Evening.label(), "Evening (4-9pm)");
        assert_eq!(TimeBucket::LateNight.label(), "Late Night (9pm-4am)");
    }

    #[test]
    fn test_day_names_order() {
        assert_eq!(DAY_NAMES[0], "Monday");
        assert_eq!(DAY_NAMES[6], "Sunday");
    }
}
