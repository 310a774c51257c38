use crate::analyzers::aggregate::aggregate_likes;
use crate::analyzers::types::{DateAverage, PlatformAverage, RowCounts, RunSummary};
use crate::output::{print_json, print_pretty, write_averages};
use crate::parser::{
    DATE, LIKES, PLATFORM, POST_TYPE, column, field, open_reader, require_column,
};
use anyhow::{Context, Result};
use tracing::info;

/// Default input export.
pub const INPUT_FILE: &str = "socialMedia.csv";
/// Default output of [`by_date`].
pub const TIME_OUTPUT_FILE: &str = "socialMediaTime.csv";
/// Default output of [`by_platform`].
pub const AVG_OUTPUT_FILE: &str = "socialMediaAvg.csv";

/// Averages likes per raw `Date` string and writes `Date,AvgLikes` rows,
/// sorted ascending by the date text.
///
/// Dates are compared as strings, so `1/2/2024` sorts before `3/1/2024`
/// regardless of the calendar.
#[tracing::instrument]
pub fn by_date(input: &str, output: &str) -> Result<RunSummary> {
    let mut rdr = open_reader(input)?;
    let headers = rdr
        .headers()
        .with_context(|| format!("failed to read header of {input}"))?
        .clone();

    let likes_col = column(&headers, LIKES);
    let date_col = require_column(&headers, DATE).with_context(|| input.to_string())?;

    let (mut groups, counts) = aggregate_likes(rdr.records(), likes_col, |record| {
        field(record, date_col).to_string()
    })
    .with_context(|| format!("failed to read {input}"))?;

    groups.sort_by_key();

    let rows: Vec<DateAverage> = groups
        .iter()
        .map(|(date, stats)| DateAverage {
            date: date.clone(),
            avg_likes: stats.mean(),
        })
        .collect();

    write_averages(output, &rows)?;

    finish("by_date", input, output, counts, rows.len())
}

/// Averages likes per (`Platform`, `PostType`) pair and writes
/// `Platform,PostType,AvgLikes` rows in the order each pair first appears.
#[tracing::instrument]
pub fn by_platform(input: &str, output: &str) -> Result<RunSummary> {
    let mut rdr = open_reader(input)?;
    let headers = rdr
        .headers()
        .with_context(|| format!("failed to read header of {input}"))?
        .clone();

    let likes_col = column(&headers, LIKES);
    let platform_col = require_column(&headers, PLATFORM).with_context(|| input.to_string())?;
    let post_type_col = require_column(&headers, POST_TYPE).with_context(|| input.to_string())?;

    let (groups, counts) = aggregate_likes(rdr.records(), likes_col, |record| {
        (
            field(record, platform_col).to_string(),
            field(record, post_type_col).to_string(),
        )
    })
    .with_context(|| format!("failed to read {input}"))?;

    let rows: Vec<PlatformAverage> = groups
        .iter()
        .map(|((platform, post_type), stats)| PlatformAverage {
            platform: platform.clone(),
            post_type: post_type.clone(),
            avg_likes: stats.mean(),
        })
        .collect();

    write_averages(output, &rows)?;

    finish("by_platform", input, output, counts, rows.len())
}

fn finish(
    pipeline: &str,
    input: &str,
    output: &str,
    counts: RowCounts,
    groups: usize,
) -> Result<RunSummary> {
    let summary = RunSummary {
        pipeline: pipeline.to_string(),
        input: input.to_string(),
        output: output.to_string(),
        counts,
        groups,
        generated_at: chrono::Utc::now(),
    };

    info!(
        pipeline,
        rows_read = counts.rows_read,
        rows_skipped = counts.rows_skipped,
        groups,
        output,
        "Averages written"
    );
    print_pretty(&summary);
    print_json(&summary)?;

    Ok(summary)
}
