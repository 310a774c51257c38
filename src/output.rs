//! Output formatting and persistence for aggregated likes.
//!
//! Supports pretty-printing and JSON logging of run summaries, and writing
//! the averaged tables as CSV.

use anyhow::{Context, Result};
use tracing::{Level, debug, enabled, trace};

use crate::analyzers::types::{AverageRow, RunSummary};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;

/// Logs a run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    trace!("{:#?}", summary);
}

/// Logs a run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    if !enabled!(Level::DEBUG) {
        return Ok(());
    }
    debug!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes `rows` to `path` under the row type's fixed header.
///
/// The file is created or truncated. The header is written even when there
/// are no rows.
pub fn write_averages<R: AverageRow>(path: &str, rows: &[R]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV averages");

    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false) // header is written by hand so empty tables still get one
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer.write_record(R::HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {path}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{DateAverage, PlatformAverage};
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&RunSummary::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&RunSummary::default()).unwrap();
    }

    #[test]
    fn test_write_averages_header_only() {
        let path = temp_path("social_media_stats_test_empty.csv");
        let _ = fs::remove_file(&path);

        let rows: Vec<DateAverage> = vec![];
        write_averages(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Date,AvgLikes\r\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_averages_formats_two_decimals() {
        let path = temp_path("social_media_stats_test_rows.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![
            PlatformAverage {
                platform: "TikTok".into(),
                post_type: "Video".into(),
                avg_likes: 200.0,
            },
            PlatformAverage {
                platform: "Instagram".into(),
                post_type: "Photo".into(),
                avg_likes: 1.0 / 3.0,
            },
        ];
        write_averages(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Platform,PostType,AvgLikes\r\nTikTok,Video,200.00\r\nInstagram,Photo,0.33\r\n"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_averages_quotes_commas() {
        let path = temp_path("social_media_stats_test_quote.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![DateAverage {
            date: "Mar 1, 2024".into(),
            avg_likes: 5.0,
        }];
        write_averages(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Date,AvgLikes\r\n\"Mar 1, 2024\",5.00\r\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_averages_overwrites() {
        let path = temp_path("social_media_stats_test_overwrite.csv");
        fs::write(&path, "stale contents that are longer than the new file\n").unwrap();

        let rows: Vec<DateAverage> = vec![];
        write_averages(&path, &rows).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Date,AvgLikes\r\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_averages_unwritable_path() {
        let rows: Vec<DateAverage> = vec![];
        assert!(write_averages("/nonexistent/dir/out.csv", &rows).is_err());
    }
}
