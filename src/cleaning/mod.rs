/*! Record cleaning stages.

Each stage consumes the working table and returns a new one, in the fixed
order driven by [crate::pipelines::ReviewClean]:

normalize → split composites → resolve tags → reconcile cities → split languages
!*/
pub mod cities;
pub mod composite;
pub mod language_split;
pub mod schema;
pub mod tags;

use crate::error::Error;

/// Attach the offending row id to structural errors raised at value level.
pub(crate) fn in_row(id: &str, err: Error) -> Error {
    match err {
        Error::Format(msg) => Error::Format(format!("row {}: {}", id, msg)),
        Error::Schema(msg) => Error::Schema(format!("row {}: {}", id, msg)),
        other => other,
    }
}
