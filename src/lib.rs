/*! # Tanqih

Offline cleaning pipeline for a bilingual (Arabic/English) review corpus.

Turns a raw CSV export — string-encoded composites, opaque tag ids,
machine-translated bilingual rows — into a per-language labeled table
ready for sentiment-classifier training.

Usable as a CLI (`tanqih pipeline <src> <mapping> <dst>`) or as a library
through the stage functions in [cleaning].
!*/
pub mod cleaning;
pub mod cli;
pub mod error;
pub mod io;
pub mod lang;
pub mod literal;
pub mod mapping;
pub mod pipelines;
pub mod processing;
pub mod types;
