//! Composite field splitting.
//!
//! Decomposes the rating object into its two numeric components and the
//! tag list into index-aligned id/sentiment vectors.
use super::in_row;
use crate::error::Error;
use crate::literal::Literal;
use crate::types::{FlatReview, Review};

/// Split a ratings object into `(normalized, raw)`.
///
/// Fails with [Error::Schema] if either key is missing or non-numeric.
pub fn split_ratings(ratings: &Literal) -> Result<(f64, f64), Error> {
    let normalized = numeric_key(ratings, "normalized")?;
    let raw = numeric_key(ratings, "raw")?;
    Ok((normalized, raw))
}

fn numeric_key(ratings: &Literal, key: &str) -> Result<f64, Error> {
    ratings
        .get(key)
        .ok_or_else(|| Error::Schema(format!("ratings object missing key '{}'", key)))?
        .as_f64()
        .ok_or_else(|| Error::Schema(format!("ratings key '{}' is not numeric", key)))
}

/// Split a tag list into `(tag_ids, sentiments)`.
///
/// Output vectors are index-aligned: `sentiments[i]` belongs to
/// `tag_ids[i]`, in the order the tags appear in the source field.
pub fn split_tags_and_sentiment(tags: &Literal) -> Result<(Vec<String>, Vec<String>), Error> {
    let entries = tags
        .as_list()
        .ok_or_else(|| Error::Schema("tags field is not a sequence".to_string()))?;

    let mut tag_ids = Vec::with_capacity(entries.len());
    let mut sentiments = Vec::with_capacity(entries.len());
    for entry in entries {
        let value = entry
            .get("value")
            .and_then(Literal::as_str)
            .ok_or_else(|| Error::Schema("tag entry missing string key 'value'".to_string()))?;
        let sentiment = entry
            .get("sentiment")
            .and_then(Literal::as_str)
            .ok_or_else(|| Error::Schema("tag entry missing string key 'sentiment'".to_string()))?;
        tag_ids.push(value.to_string());
        sentiments.push(sentiment.to_string());
    }

    Ok((tag_ids, sentiments))
}

/// Table-level stage. Row count is preserved exactly.
pub fn split_composites(rows: Vec<Review>) -> Result<Vec<FlatReview>, Error> {
    rows.into_iter()
        .map(|row| {
            let (normalized_rating, raw_rating) =
                split_ratings(&row.ratings).map_err(|e| in_row(&row.id, e))?;
            let (tag_ids, sentiments) =
                split_tags_and_sentiment(&row.tags).map_err(|e| in_row(&row.id, e))?;

            Ok(FlatReview {
                id: row.id,
                date: row.date,
                tag_ids,
                sentiments,
                normalized_rating,
                raw_rating,
                title: row.title,
                content: row.content,
                language: row.language,
            })
        })
        .collect()
}
