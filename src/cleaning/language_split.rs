/*! Bilingual review splitting.

Machine-translated reviews pack both languages into one content string:

```text
More(Translated by Google) english text (Original) arabic text
```

A second, lowercased form of the marker appears in part of the export.
Each such row becomes two observations, one per language, which augments
the training data. Two passes: matches are collected first, then the table
is rebuilt with the Arabic variants in place and the English copies
appended, so the scan never sees the rows it creates.
!*/
use log::debug;

use crate::error::Error;
use crate::lang::{ARABIC, ENGLISH};
use crate::types::OutputRow;

/// A literal content prefix flagging a machine-translated review, paired
/// with the separator that divides the English and Arabic segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilingualMarker {
    pub prefix: &'static str,
    pub separator: &'static str,
}

/// Known marker forms, checked in order.
pub static MARKERS: [BilingualMarker; 2] = [
    BilingualMarker {
        prefix: "More(Translated by Google)",
        separator: " (Original) ",
    },
    BilingualMarker {
        prefix: "moretranslated by google",
        separator: " original ",
    },
];

/// Detect a bilingual marker at the start of `content`.
pub fn detect(content: &str) -> Option<&'static BilingualMarker> {
    MARKERS.iter().find(|m| content.starts_with(m.prefix))
}

/// Extract `(english, arabic)` segments from a marked content string.
///
/// The English segment sits between `prefix + " "` and the first
/// separator occurrence; the Arabic segment is everything after it.
/// A marker without its separator (or without the space after the
/// prefix) is malformed input and fails with [Error::Format] rather
/// than producing a truncated split.
pub fn split_segments(content: &str, marker: &BilingualMarker) -> Result<(String, String), Error> {
    let (head, arabic) = content.split_once(marker.separator).ok_or_else(|| {
        Error::Format(format!(
            "bilingual marker '{}' without separator '{}'",
            marker.prefix, marker.separator
        ))
    })?;

    let english = head
        .strip_prefix(marker.prefix)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| {
            Error::Format(format!(
                "bilingual marker '{}' not followed by a space",
                marker.prefix
            ))
        })?;

    Ok((english.to_string(), arabic.to_string()))
}

/// Table-level stage: expand each bilingual row into an Arabic row (in
/// place of the original) and an English row (appended at the end, in
/// original match order). Appended rows are not re-scanned.
pub fn separate_languages(rows: Vec<OutputRow>) -> Result<Vec<OutputRow>, Error> {
    // first pass: collect splits without touching the table
    let mut splits: Vec<(usize, String, String)> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        if let Some(marker) = detect(&row.content) {
            let (english, arabic) =
                split_segments(&row.content, marker).map_err(|e| super::in_row(&row.id, e))?;
            splits.push((idx, english, arabic));
        }
    }
    debug!("splitting {} bilingual rows", splits.len());

    // second pass: rebuild
    let mut out = rows;
    let mut appended = Vec::with_capacity(splits.len());
    for (idx, english, arabic) in splits {
        let mut english_row = out[idx].clone();
        english_row.content = english;
        english_row.language = ENGLISH.to_string();
        appended.push(english_row);

        out[idx].content = arabic;
        out[idx].language = ARABIC.to_string();
    }
    out.extend(appended);

    Ok(out)
}
