//! Offline operations over already-cleaned files.
mod extract;

pub use extract::extract_languages;
