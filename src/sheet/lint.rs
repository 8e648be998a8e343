//! Sheet linting
//!
//! Checks for:
//! - Unknown or missing header columns
//! - Rows with fewer or more tokens than header columns
//! - Unbalanced quotes
//! - Sheets without data rows
//!
//! Linting only reports; the records a sheet parses to are the same either way.

use crate::core::error::ParseError;
use crate::core::model::{Notice, ResultItem, Severity, SourceMode};
use crate::core::util::truncate_string;
use crate::sheet::header::{Column, FieldKey};
use crate::sheet::parse::{parse_sheet, ParsedSheet, SheetRow};

/// Longest row excerpt attached to an issue
const MAX_EXCERPT_BYTES: usize = 120;

/// A lint issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub line: Option<usize>,
    pub excerpt: Option<String>,
}

impl LintIssue {
    fn error(code: &'static str, message: String, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
            line,
            excerpt: None,
        }
    }

    fn warning(code: &'static str, message: String, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
            line,
            excerpt: None,
        }
    }

    fn with_row(mut self, row: &SheetRow) -> Self {
        self.excerpt = Some(row.raw.clone());
        self
    }

    pub fn to_result_item(&self, source_mode: SourceMode) -> ResultItem {
        let mut item = ResultItem::notice(
            Notice::new(self.code, self.message.clone(), self.severity),
            source_mode,
        );
        if let Some(line) = self.line {
            item = item.with_line(line);
        }
        if let Some(excerpt) = &self.excerpt {
            let (excerpt, truncated) = truncate_string(excerpt, MAX_EXCERPT_BYTES);
            item = item.with_excerpt(excerpt, truncated);
        }
        item
    }
}

/// Lint sheet text
pub fn lint_text(text: &str) -> Vec<LintIssue> {
    match parse_sheet(text) {
        Ok(sheet) => lint_sheet(&sheet),
        Err(ParseError::EmptyInput) => vec![LintIssue::error(
            "EMPTY_SHEET",
            "Sheet has no header row".to_string(),
            None,
        )],
    }
}

/// Lint an already parsed sheet
pub fn lint_sheet(sheet: &ParsedSheet) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let header_line = Some(sheet.header_line);

    for name in sheet.header.unknown_columns() {
        issues.push(LintIssue::warning(
            "UNKNOWN_COLUMN",
            format!("Column '{}' is not used and will be ignored", name),
            header_line,
        ));
    }

    for key in [FieldKey::Question, FieldKey::Answer] {
        if !sheet.header.contains(key) {
            issues.push(LintIssue::warning(
                "MISSING_COLUMN",
                format!("Header has no '{}' column", key.as_str()),
                header_line,
            ));
        }
    }

    if sheet.rows.is_empty() {
        issues.push(LintIssue::error(
            "EMPTY_SHEET",
            "Sheet has a header but no data rows".to_string(),
            header_line,
        ));
    }

    let width = sheet.header.len();
    for row in &sheet.rows {
        if row.raw.matches('"').count() % 2 != 0 {
            issues.push(
                LintIssue::error(
                    "UNBALANCED_QUOTES",
                    format!("Row {} has an unbalanced quote", row.record.id),
                    Some(row.line),
                )
                .with_row(row),
            );
        }

        if row.token_count < width {
            let missing: Vec<&str> = sheet.header.columns[row.token_count..]
                .iter()
                .filter_map(|c| match c {
                    Column::Known(key) => Some(key.as_str()),
                    Column::Unknown(_) => None,
                })
                .collect();
            if !missing.is_empty() {
                issues.push(
                    LintIssue::warning(
                        "SHORT_ROW",
                        format!(
                            "Row {} has {} of {} fields; defaulted: {}",
                            row.record.id,
                            row.token_count,
                            width,
                            missing.join(", ")
                        ),
                        Some(row.line),
                    )
                    .with_row(row),
                );
            }
        } else if row.token_count > width {
            issues.push(
                LintIssue::warning(
                    "EXTRA_TOKENS",
                    format!(
                        "Row {} has {} fields but the header has {}; extra fields are ignored",
                        row.record.id, row.token_count, width
                    ),
                    Some(row.line),
                )
                .with_row(row),
            );
        }
    }

    issues
}
