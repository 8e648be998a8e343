//! Sheet module - Parse a published CSV sheet into records
//!
//! The first non-blank line is the header; every following non-blank line
//! becomes one record, with ids starting at 100.

pub mod header;
pub mod lint;
pub mod parse;
pub mod record;
pub mod tokenize;
