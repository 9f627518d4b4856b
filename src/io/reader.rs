//! Raw dataset reading.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::types::RawReview;

/// Read the raw reviews CSV. Empty `tags`/`ratings` cells become [None].
pub fn read_reviews(path: &Path) -> Result<Vec<RawReview>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<RawReview>, csv::Error>>()?;
    info!("read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}
