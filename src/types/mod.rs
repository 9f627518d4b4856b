/*! Working-table row types.

One type per stage boundary: rows are replaced, not mutated in place,
as they move through the pipeline.
!*/
mod review;

pub use review::{CityAttribution, FlatReview, OutputRow, RawReview, ResolvedReview, Review, TagAttributes};
