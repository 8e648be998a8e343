//! Error types for sheet parsing and data loading

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the sheet parser itself.
///
/// Row-level problems are never errors: they degrade to default field values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input contains no non-empty lines")]
    EmptyInput,
}

/// Failures while loading records from a configured source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("source parsed to zero records")]
    EmptyParseResult,
}

impl SourceError {
    /// Stable code used when the error is surfaced as a notice
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::Fetch { .. } => "FETCH_FAILURE",
            SourceError::Read { .. } => "READ_FAILURE",
            SourceError::Parse(_) | SourceError::EmptyParseResult => "EMPTY_PARSE_RESULT",
        }
    }

    /// Soft failures keep the held records without telling the user.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            SourceError::Parse(_) | SourceError::EmptyParseResult
        )
    }
}
