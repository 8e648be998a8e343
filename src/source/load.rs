//! Loading records from the configured source
//!
//! The built-in entries are held first. A configured source replaces them
//! only when it parses to at least one record; any failure leaves them in
//! place.

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::error::SourceError;
use crate::core::model::{Notice, SourceMode};
use crate::sheet::parse::parse_records;
use crate::sheet::record::Record;
use crate::source::config::{DataSource, SourceConfig};
use crate::source::fallback::fallback_records;
use crate::source::fetch::Fetch;

pub const FETCH_FAILURE_MESSAGE: &str = "Could not fetch updated info. Showing saved info.";

/// Records currently held, plus how they got there
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub source_mode: SourceMode,
    pub notices: Vec<Notice>,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    fn fallback() -> Self {
        Self {
            records: fallback_records(),
            source_mode: SourceMode::Fallback,
            notices: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Replace the held records. Empty batches are rejected so the previous
    /// records stay visible.
    fn replace(&mut self, records: Vec<Record>, source_mode: SourceMode) -> Result<(), SourceError> {
        if records.is_empty() {
            return Err(SourceError::EmptyParseResult);
        }
        self.records = records;
        self.source_mode = source_mode;
        self.loaded_at = Utc::now();
        Ok(())
    }
}

/// Read the raw sheet text for a configured source
pub fn read_source(source: &DataSource, fetcher: &dyn Fetch) -> Option<Result<String, SourceError>> {
    match source {
        DataSource::Remote(url) => {
            info!(%url, "fetching updated info");
            Some(fetcher.fetch(url))
        }
        DataSource::File(path) => Some(read_file(path)),
        DataSource::None => None,
    }
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load records, falling back to the built-in entries on any failure
pub fn load_records(config: &SourceConfig, fetcher: &dyn Fetch) -> LoadReport {
    let mut report = LoadReport::fallback();

    let source_mode = config.source.mode();
    let Some(text) = read_source(&config.source, fetcher) else {
        debug!("no data source configured, using built-in entries");
        return report;
    };

    let outcome = text
        .and_then(|text| parse_records(&text).map_err(SourceError::from))
        .and_then(|records| {
            let count = records.len();
            report.replace(records, source_mode).map(|_| count)
        });

    match outcome {
        Ok(count) => info!(records = count, "loaded records"),
        Err(err) if err.is_silent() => {
            warn!(error = %err, "source yielded no records, keeping previous entries");
        }
        Err(err) => {
            warn!(error = %err, "could not load records, keeping previous entries");
            let message = match &err {
                SourceError::Fetch { .. } => FETCH_FAILURE_MESSAGE.to_string(),
                other => other.to_string(),
            };
            report.notices.push(Notice::warning(err.code(), message));
        }
    }

    report
}
