use crate::analyzers::types::RowCounts;
use crate::parser::parse_likes;
use crate::stats::GroupedLikes;
use anyhow::Result;
use csv::StringRecord;
use std::hash::Hash;

/// Folds CSV records into per-key like accumulators in a single pass.
///
/// Records whose `Likes` field is absent or not a number are skipped and
/// contribute to no key. `likes_col` is `None` when the header has no `Likes`
/// column, in which case every record is skipped.
///
/// # Errors
///
/// Returns the first read error from `records` (I/O, malformed CSV, or
/// invalid UTF-8).
pub fn aggregate_likes<K, I, F>(
    records: I,
    likes_col: Option<usize>,
    mut key_of: F,
) -> Result<(GroupedLikes<K>, RowCounts)>
where
    K: Hash + Eq,
    I: IntoIterator<Item = csv::Result<StringRecord>>,
    F: FnMut(&StringRecord) -> K,
{
    let mut groups = GroupedLikes::new();
    let mut counts = RowCounts::default();

    for result in records {
        let record = result?;
        counts.rows_read += 1;

        let likes = likes_col
            .and_then(|idx| record.get(idx))
            .and_then(parse_likes);

        match likes {
            Some(likes) => {
                groups.record(key_of(&record), likes);
                counts.rows_aggregated += 1;
            }
            None => counts.rows_skipped += 1,
        }
    }

    Ok((groups, counts))
}
