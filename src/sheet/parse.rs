//! Sheet parsing
//!
//! Turns CSV text exported from a spreadsheet into records. The first
//! non-blank line is the header; every later non-blank line is a data row.
//! Parsing never fails on a bad row: unresolved fields fall back to their
//! defaults.

use crate::core::error::ParseError;
use crate::sheet::header::Header;
use crate::sheet::record::Record;
use crate::sheet::tokenize::split_row;

/// A data row together with where it came from
#[derive(Debug, Clone)]
pub struct SheetRow {
    /// 1-based line number in the source text
    pub line: usize,
    /// The trimmed source line
    pub raw: String,
    /// Number of tokens the row split into
    pub token_count: usize,
    pub record: Record,
}

/// Result of parsing a whole sheet
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub header: Header,
    pub header_line: usize,
    pub rows: Vec<SheetRow>,
}

impl ParsedSheet {
    pub fn into_records(self) -> Vec<Record> {
        self.rows.into_iter().map(|row| row.record).collect()
    }
}

/// Parse sheet text into records, in row order
pub fn parse_records(text: &str) -> Result<Vec<Record>, ParseError> {
    parse_sheet(text).map(ParsedSheet::into_records)
}

/// Parse sheet text, keeping per-row details for diagnostics
pub fn parse_sheet(text: &str) -> Result<ParsedSheet, ParseError> {
    let mut lines = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header_text) = lines.next().ok_or(ParseError::EmptyInput)?;
    let header = Header::parse(header_text);

    let rows = lines
        .enumerate()
        .map(|(index, (line, raw))| {
            let tokens = split_row(raw);
            let fields = header.assign(&tokens);
            SheetRow {
                line,
                raw: raw.to_string(),
                token_count: tokens.len(),
                record: Record::from_fields(index, &fields),
            }
        })
        .collect();

    Ok(ParsedSheet {
        header,
        header_line,
        rows,
    })
}
