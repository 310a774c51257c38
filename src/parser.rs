//! CSV input for the social-media post export.

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// Column holding the numeric like count.
pub const LIKES: &str = "Likes";
pub const DATE: &str = "Date";
pub const PLATFORM: &str = "Platform";
pub const POST_TYPE: &str = "PostType";

/// Opens a CSV file with a header row.
///
/// Records may have more or fewer fields than the header; missing fields are
/// handled per column by [`field`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_reader(path: &str) -> Result<Reader<File>> {
    let file = File::open(Path::new(path)).with_context(|| format!("failed to open {path}"))?;

    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

/// Parses a `Likes` value. Surrounding whitespace is ignored and single
/// underscores between digits are allowed (`1_000`); anything else that
/// isn't a float yields `None`.
pub fn parse_likes(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }

    let bytes = trimmed.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }

    trimmed.replace('_', "").parse::<f64>().ok()
}

/// Returns the position of `name` in the header row, the last one when it is
/// repeated.
pub fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .as_byte_record()
        .iter()
        .rposition(|h| h == name.as_bytes())
}

/// Like [`column`], but the column is required.
pub fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    column(headers, name).with_context(|| format!("missing required column `{name}`"))
}

/// Field at `idx`, or the empty string when the record is too short.
pub fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}
