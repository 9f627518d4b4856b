//! Tag mapping table.
//!
//! Externally supplied JSON document resolving opaque tag ids into
//! `[location_type, city]` pairs. Every tag id referenced by the dataset
//! must be present; a miss means the upstream export is corrupted.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::types::TagAttributes;

#[derive(Debug, Clone, Deserialize)]
pub struct TagMapping {
    tags_mapping: HashMap<String, TagAttributes>,
}

impl TagMapping {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mapping = serde_json::from_reader(BufReader::new(file))?;
        Ok(mapping)
    }

    /// Resolve a tag id. Fails with [Error::UnknownTag] on a miss.
    pub fn get(&self, tag_id: &str) -> Result<&TagAttributes, Error> {
        self.tags_mapping
            .get(tag_id)
            .ok_or_else(|| Error::UnknownTag(tag_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tags_mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags_mapping.is_empty()
    }
}
