//! Data source configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::model::SourceMode;

/// Sheet URL baked in at build time, if any
pub const BUILD_SHEET_URL: Option<&str> = option_env!("TRIPINFO_SHEET_URL");

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where records are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A published CSV export reachable over HTTP(S)
    Remote(String),
    /// A CSV file on disk
    File(PathBuf),
    /// No source configured; the built-in entries are used
    None,
}

impl DataSource {
    /// How records loaded from this source are labelled
    pub fn mode(&self) -> SourceMode {
        match self {
            DataSource::Remote(_) => SourceMode::Remote,
            DataSource::File(_) => SourceMode::File,
            DataSource::None => SourceMode::Fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub source: DataSource,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source: DataSource::None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    /// Resolve the source from command-line values.
    ///
    /// Precedence: offline, then file, then url, then the build-time URL.
    /// A blank URL counts as no URL.
    pub fn resolve(
        url: Option<&str>,
        file: Option<&Path>,
        offline: bool,
        timeout_secs: u64,
    ) -> Self {
        let source = if offline {
            DataSource::None
        } else if let Some(path) = file {
            DataSource::File(path.to_path_buf())
        } else {
            url.or(BUILD_SHEET_URL)
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| DataSource::Remote(u.to_string()))
                .unwrap_or(DataSource::None)
        };

        Self {
            source,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
