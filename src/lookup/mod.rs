//! Lookup module - Search, categories and command handlers

pub mod api;
pub mod filter;
pub mod icons;
