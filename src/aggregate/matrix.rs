//! Two-dimensional pivot matrices.

use std::collections::HashMap;

use crate::features::features;
use crate::model::{IncidentRecord, TimeBucket};

/// Day-of-week by hour-of-day count grid.
///
/// Rows are Monday through Sunday, columns hours 0-23, missing cells zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHourMatrix {
    pub cells: [[usize; 24]; 7],
}

impl DayHourMatrix {
    /// Sum over every cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest single cell count, at least 1 so it can scale a color ramp.
    pub fn max_cell(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0).max(1)
    }
}

/// Counts every timestamped record into its (weekday, hour) cell.
pub fn day_hour_matrix(records: &[IncidentRecord]) -> DayHourMatrix {
    let mut cells = [[0usize; 24]; 7];
    for f in records.iter().filter_map(features) {
        cells[f.weekday as usize][f.hour as usize] += 1;
    }
    DayHourMatrix { cells }
}

/// Calendar-month by time-bucket count table.
///
/// `months` holds the months (1-12) that occur in the data, ascending.
/// `buckets` holds only the bucket columns that actually occur, in
/// presentation order. Cells missing from `counts` are zero.
#[derive(Debug, Clone)]
pub struct MonthBucketMatrix {
    pub months: Vec<u32>,
    pub buckets: Vec<TimeBucket>,
    counts: HashMap<(u32, TimeBucket), usize>,
}

impl MonthBucketMatrix {
    pub fn count(&self, month: u32, bucket: TimeBucket) -> usize {
        self.counts.get(&(month, bucket)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Counts every timestamped record into its (month, bucket) cell.
pub fn month_bucket_matrix(records: &[IncidentRecord]) -> MonthBucketMatrix {
    let mut counts: HashMap<(u32, TimeBucket), usize> = HashMap::new();
    for f in records.iter().filter_map(features) {
        *counts.entry((f.month, f.bucket)).or_default() += 1;
    }

    let mut months: Vec<u32> = counts.keys().map(|(m, _)| *m).collect();
    months.sort_unstable();
    months.dedup();

    let buckets: Vec<TimeBucket> = TimeBucket::ALL
        .into_iter()
        .filter(|b| counts.keys().any(|(_, kb)| kb == b))
        .collect();

    MonthBucketMatrix {
        months,
        buckets,
        counts,
    }
}
