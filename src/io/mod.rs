//! Flat-file I/O for the working table.
pub mod reader;
pub mod writer;
