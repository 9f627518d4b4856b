//! Language codes of the corpus.
//!
//! The raw dataset labels rows with ISO 639-3 style short codes.
//! Machine-translated rows carry `eng` before splitting and yield one
//! `ara` and one `eng` observation afterwards.
use std::collections::HashSet;

use lazy_static::lazy_static;

pub static ENGLISH: &str = "eng";
pub static ARABIC: &str = "ara";

lazy_static! {
    /// Languages that may appear in the cleaned corpus.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert(ENGLISH);
        m.insert(ARABIC);
        m
    };
}
