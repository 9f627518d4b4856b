/*! Per-language extraction.

Splits an already-cleaned CSV into one file per language, for the
downstream text-preprocessing steps that run per language. Rows pass
through untouched; only the grouping changes.
!*/
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::info;

use crate::error::Error;

/// Split `src` into `dst/<language>.csv` files.
///
/// Returns `(language, row count)` pairs, sorted by language.
pub fn extract_languages(src: &Path, dst: &Path) -> Result<Vec<(String, usize)>, Error> {
    std::fs::create_dir_all(dst)?;

    let mut reader = csv::Reader::from_path(src)?;
    let headers = reader.headers()?.clone();
    let lang_idx = headers
        .iter()
        .position(|h| h == "language")
        .ok_or_else(|| Error::Schema("input file has no 'language' column".to_string()))?;

    let mut writers: HashMap<String, csv::Writer<File>> = HashMap::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let lang = record
            .get(lang_idx)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| Error::Schema("row with empty 'language' value".to_string()))?
            .to_string();

        let writer = match writers.entry(lang.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(v) => {
                let mut writer = csv::Writer::from_path(dst.join(format!("{}.csv", lang)))?;
                writer.write_record(&headers)?;
                v.insert(writer)
            }
        };
        writer.write_record(&record)?;
        *counts.entry(lang).or_insert(0) += 1;
    }

    for writer in writers.values_mut() {
        writer.flush()?;
    }

    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort();
    for (lang, count) in &counts {
        info!("[{}] extracted {} rows", lang, count);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{tempdir, NamedTempFile};

    use super::extract_languages;

    #[test]
    fn test_extract_languages() {
        let mut src = NamedTempFile::new().unwrap();
        writeln!(src, "id,content,language").unwrap();
        writeln!(src, "r0,first,eng").unwrap();
        writeln!(src, "r1,ثاني,ara").unwrap();
        writeln!(src, "r2,third,eng").unwrap();

        let dst = tempdir().unwrap();
        let counts = extract_languages(src.path(), dst.path()).unwrap();
        assert_eq!(
            counts,
            vec![("ara".to_string(), 1), ("eng".to_string(), 2)]
        );

        let mut reader = csv::Reader::from_path(dst.path().join("eng.csv")).unwrap();
        let ids: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(0).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["r0", "r2"]);
    }

    #[test]
    fn test_missing_language_column() {
        let mut src = NamedTempFile::new().unwrap();
        writeln!(src, "id,content").unwrap();
        writeln!(src, "r0,first").unwrap();

        let dst = tempdir().unwrap();
        assert!(extract_languages(src.path(), dst.path()).is_err());
    }
}
