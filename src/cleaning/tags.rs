//! Tag resolution.
//!
//! Replaces opaque tag ids with their semantic `(location_type, city)`
//! attributes and projects the per-row city and type sequences out of them.
use crate::error::Error;
use crate::mapping::TagMapping;
use crate::types::{CityAttribution, FlatReview, ResolvedReview, TagAttributes};

/// Resolve each tag id through the mapping table, keeping length and order.
///
/// Fails with [Error::UnknownTag] on the first id absent from the table.
pub fn map_tags(tag_ids: &[String], mapping: &TagMapping) -> Result<Vec<TagAttributes>, Error> {
    tag_ids
        .iter()
        .map(|id| mapping.get(id).map(Clone::clone))
        .collect()
}

/// Project the city component, preserving order.
pub fn derive_city(tags: &[TagAttributes]) -> Vec<String> {
    tags.iter().map(|t| t.city.clone()).collect()
}

/// Project the location-type component, preserving order.
pub fn derive_type(tags: &[TagAttributes]) -> Vec<String> {
    tags.iter().map(|t| t.location_type.clone()).collect()
}

/// Table-level stage.
///
/// The emitted city sequence starts out as the raw
/// [CityAttribution::Ambiguous] candidate list; collapsing it is the
/// reconciliation engine's job.
pub fn resolve(rows: Vec<FlatReview>, mapping: &TagMapping) -> Result<Vec<ResolvedReview>, Error> {
    rows.into_iter()
        .map(|row| {
            let transformed_tags = map_tags(&row.tag_ids, mapping)?;
            let cities = derive_city(&transformed_tags);
            let location_types = derive_type(&transformed_tags);

            Ok(ResolvedReview {
                id: row.id,
                date: row.date,
                transformed_tags,
                sentiments: row.sentiments,
                normalized_rating: row.normalized_rating,
                raw_rating: row.raw_rating,
                title: row.title,
                content: row.content,
                language: row.language,
                location_types,
                city: CityAttribution::Ambiguous(cities),
            })
        })
        .collect()
}
