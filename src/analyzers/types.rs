//! Data types used by the aggregation pipelines.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::analyzers::utility::format_avg;

/// A row of an averaged output table.
pub trait AverageRow: Serialize {
    /// Fixed CSV header, in field order.
    const HEADER: &'static [&'static str];
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_avg(*value))
}

/// Average likes for one raw `Date` string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateAverage {
    pub date: String,
    #[serde(serialize_with = "two_decimals")]
    pub avg_likes: f64,
}

impl AverageRow for DateAverage {
    const HEADER: &'static [&'static str] = &["Date", "AvgLikes"];
}

/// Average likes for one (`Platform`, `PostType`) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformAverage {
    pub platform: String,
    pub post_type: String,
    #[serde(serialize_with = "two_decimals")]
    pub avg_likes: f64,
}

impl AverageRow for PlatformAverage {
    const HEADER: &'static [&'static str] = &["Platform", "PostType", "AvgLikes"];
}

/// Row tallies from a single pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    pub rows_read: u64,
    pub rows_aggregated: u64,
    pub rows_skipped: u64,
}

/// What a pipeline run read and wrote. Only logged, never persisted.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub pipeline: String,
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub counts: RowCounts,
    pub groups: usize,
    pub generated_at: DateTime<Utc>,
}
