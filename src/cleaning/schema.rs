//! Schema normalization.
//!
//! Turns string-encoded columns into typed values and drops rows that miss
//! required fields. Malformed values are hard errors: the run aborts with a
//! message naming the row, nothing is silently skipped or defaulted.
use chrono::{DateTime, FixedOffset};
use log::debug;

use super::in_row;
use crate::error::Error;
use crate::literal::parse_literal;
use crate::types::{RawReview, Review};

/// The one accepted date format, `YYYY-MM-DDTHH:MM:SS±HHMM`.
/// No fallback format is attempted.
pub static DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a raw date string. Fails with [Error::Format] on a mismatch.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, Error> {
    Ok(DateTime::parse_from_str(raw, DATE_FORMAT)?)
}

/// Keep only rows for which `has_value` holds. The rebuilt table is
/// contiguously indexed; row count never increases.
pub fn remove_empty_rows<T, F>(rows: Vec<T>, has_value: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    let before = rows.len();
    let kept: Vec<T> = rows.into_iter().filter(|row| has_value(row)).collect();
    debug!("dropped {} rows with missing values", before - kept.len());
    kept
}

/// Normalize a table of raw rows: parse dates and literal-encoded
/// composites. Expects null-ratings rows to have been dropped already.
pub fn normalize(rows: Vec<RawReview>) -> Result<Vec<Review>, Error> {
    rows.into_iter()
        .map(|row| {
            let date = parse_timestamp(&row.date).map_err(|e| in_row(&row.id, e))?;
            let tags_raw = row
                .tags
                .ok_or_else(|| Error::Format(format!("row {}: missing tags field", row.id)))?;
            let tags = parse_literal(&tags_raw).map_err(|e| in_row(&row.id, e))?;
            let ratings_raw = row
                .ratings
                .ok_or_else(|| Error::Format(format!("row {}: missing ratings field", row.id)))?;
            let ratings = parse_literal(&ratings_raw).map_err(|e| in_row(&row.id, e))?;

            Ok(Review {
                id: row.id,
                date,
                tags,
                ratings,
                title: row.title,
                content: row.content,
                language: row.language,
            })
        })
        .collect()
}
