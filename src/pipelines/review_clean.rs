/*! Review cleaning pipeline.

Single-pass, single-threaded batch transform:

raw CSV → schema normalization → composite splitting → tag resolution
→ city reconciliation → column filter → language splitting → cleaned CSV.

Each stage replaces the working table. Any structural error aborts the
whole run; there is no partial-success mode.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Pipeline;
use crate::cleaning::{cities, composite, language_split, schema, tags};
use crate::error::Error;
use crate::io::{reader, writer};
use crate::mapping::TagMapping;
use crate::types::OutputRow;

pub struct ReviewClean {
    src: PathBuf,
    mapping: PathBuf,
    dst: PathBuf,
    split_languages: bool,
}

impl ReviewClean {
    pub fn new(src: PathBuf, mapping: PathBuf, dst: PathBuf, split_languages: bool) -> Self {
        Self {
            src,
            mapping,
            dst,
            split_languages,
        }
    }
}

impl Pipeline<()> for ReviewClean {
    fn run(&self) -> Result<(), Error> {
        let mapping = TagMapping::from_path(&self.mapping)?;
        info!("loaded {} tag mappings", mapping.len());

        let rows = reader::read_reviews(&self.src)?;

        let rows = schema::remove_empty_rows(rows, |row| row.ratings.is_some());
        let rows = schema::normalize(rows)?;
        debug!("normalized {} rows", rows.len());

        let rows = composite::split_composites(rows)?;
        let rows = tags::resolve(rows, &mapping)?;

        let rows = cities::collapse_cities(rows);
        let ambiguous = cities::find_ambiguous_rows(&rows);
        info!("{} rows with ambiguous city attribution", ambiguous.len());
        let rows = cities::fix_incorrect_cities(rows, &ambiguous, &cities::CITY_OVERRIDES);

        let rows: Vec<OutputRow> = rows.into_iter().map(OutputRow::from).collect();
        let rows = language_split::separate_languages(rows)?;

        writer::write_reviews(&self.dst, &rows)?;
        if self.split_languages {
            let dst_dir = self.dst.parent().unwrap_or_else(|| Path::new("."));
            writer::write_language_subsets(dst_dir, &rows)?;
        }

        Ok(())
    }
}
