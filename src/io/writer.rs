//! Cleaned dataset writing.
use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::types::OutputRow;

/// Write the cleaned table as CSV.
pub fn write_reviews(path: &Path, rows: &[OutputRow]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

/// Write one CSV per language next to the main output.
///
/// Returns `(language, row count)` pairs, sorted by language.
pub fn write_language_subsets(
    dst_dir: &Path,
    rows: &[OutputRow],
) -> Result<Vec<(String, usize)>, Error> {
    let mut by_lang: HashMap<&str, Vec<&OutputRow>> = HashMap::new();
    for row in rows {
        by_lang.entry(&row.language).or_default().push(row);
    }

    let mut counts = Vec::with_capacity(by_lang.len());
    for (lang, subset) in by_lang.into_iter().sorted_by_key(|(lang, _)| *lang) {
        let path = dst_dir.join(format!("{}.csv", lang));
        let mut writer = csv::Writer::from_path(&path)?;
        for row in &subset {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("[{}] wrote {} rows to {:?}", lang, subset.len(), path);
        counts.push((lang.to_string(), subset.len()));
    }
    Ok(counts)
}
