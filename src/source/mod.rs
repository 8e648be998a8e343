//! Source module - Decide where records come from and load them
//!
//! A configured sheet is fetched over HTTP or read from disk. When it is
//! missing, unreachable or yields nothing, the built-in entries are used.

pub mod config;
pub mod fallback;
pub mod fetch;
pub mod load;
