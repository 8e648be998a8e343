//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Error types for parsing and loading
//! - Rendering functions for different output formats
//! - Common utilities

pub mod error;
pub mod model;
pub mod render;
pub mod util;
