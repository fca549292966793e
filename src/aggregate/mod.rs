//! Frequency tables and pivot matrices over the incident set.
//!
//! Every aggregation here is pure and order-independent; records without a
//! parsed timestamp are excluded from the time-based counts.

pub mod frequency;
pub mod matrix;

pub use frequency::{counts_by_day_of_week, counts_by_hour, counts_per_month, top_charges};
pub use matrix::{DayHourMatrix, MonthBucketMatrix, day_hour_matrix, month_bucket_matrix};
