//! Storage implementations for the hospital records console
//!
//! Currently a single flat-file store (pipe-delimited text, one file per
//! record kind).

pub mod file;
pub use file::{RecordStore, Records};
