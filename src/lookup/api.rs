//! Lookup API - list, categories, show, status, lint

use anyhow::{Context, Result};

use crate::core::model::{Meta, Notice, ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::lookup::filter::{categories, filter, CategoryFilter, ALL_CATEGORIES};
use crate::sheet::lint::lint_text;
use crate::source::config::SourceConfig;
use crate::source::fetch::{Fetch, HttpFetcher};
use crate::source::load::{load_records, read_source, LoadReport};

pub const NO_MATCHES_MESSAGE: &str =
    "No answers found. Try another search term or choose 'All'.";

fn notice_items(report: &LoadReport) -> impl Iterator<Item = ResultItem> + '_ {
    report
        .notices
        .iter()
        .map(|notice| ResultItem::notice(notice.clone(), report.source_mode))
}

/// Filtered entries, preceded by any load notices
pub fn list_entries(
    report: &LoadReport,
    search: &str,
    category: &CategoryFilter,
    expand: bool,
) -> ResultSet {
    let mut result_set: ResultSet = notice_items(report).collect();

    let hits = filter(&report.records, search, category);
    if hits.is_empty() {
        result_set.push(ResultItem::notice(
            Notice::info("NO_MATCHES", NO_MATCHES_MESSAGE),
            report.source_mode,
        ));
    }
    result_set.extend(
        hits.into_iter()
            .map(|record| ResultItem::entry(record, report.source_mode, expand)),
    );

    result_set
}

/// The "All" sentinel followed by each category with its record count
pub fn list_categories(report: &LoadReport) -> ResultSet {
    let mut result_set: ResultSet = notice_items(report).collect();
    result_set.push(ResultItem::category(
        ALL_CATEGORIES,
        report.records.len(),
        report.source_mode,
    ));
    result_set.extend(
        categories(&report.records)
            .into_iter()
            .map(|(name, count)| ResultItem::category(name, count, report.source_mode)),
    );
    result_set
}

/// A single entry, expanded
pub fn show_entry(report: &LoadReport, id: u32) -> ResultSet {
    let mut result_set: ResultSet = notice_items(report).collect();
    match report.records.iter().find(|record| record.id == id) {
        Some(record) => result_set.push(ResultItem::entry(record, report.source_mode, true)),
        None => result_set.push(ResultItem::notice(
            Notice::warning("NOT_FOUND", format!("No entry with id {}", id)),
            report.source_mode,
        )),
    }
    result_set
}

/// Summary of what was loaded
pub fn load_status(report: &LoadReport) -> ResultSet {
    let meta = Meta {
        loaded_at: Some(report.loaded_at.to_rfc3339()),
        records: Some(report.records.len()),
        categories: Some(categories(&report.records).len()),
        truncated: false,
    };
    let mut item = ResultItem::status(report.source_mode, meta);
    item.notices = report.notices.clone();

    let mut result_set = ResultSet::new();
    result_set.push(item);
    result_set
}

/// Diagnostics for the configured sheet
pub fn lint_source(config: &SourceConfig, fetcher: &dyn Fetch) -> Result<ResultSet> {
    let source_mode = config.source.mode();

    let Some(text) = read_source(&config.source, fetcher) else {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::notice(
            Notice::info("NO_SOURCE", "No sheet configured; built-in entries are in use"),
            source_mode,
        ));
        return Ok(result_set);
    };
    let text = text.context("Failed to load sheet for linting")?;

    Ok(lint_text(&text)
        .iter()
        .map(|issue| issue.to_result_item(source_mode))
        .collect())
}

fn load(config: &SourceConfig) -> LoadReport {
    load_records(config, &HttpFetcher::new(config.timeout))
}

/// Run list command
pub fn run_list(
    config: &SourceConfig,
    search: &str,
    category: &CategoryFilter,
    expand: bool,
    render_config: RenderConfig,
) -> Result<()> {
    let report = load(config);
    Renderer::with_config(render_config).emit(&list_entries(&report, search, category, expand));
    Ok(())
}

/// Run categories command
pub fn run_categories(config: &SourceConfig, render_config: RenderConfig) -> Result<()> {
    let report = load(config);
    Renderer::with_config(render_config).emit(&list_categories(&report));
    Ok(())
}

/// Run show command
pub fn run_show(config: &SourceConfig, id: u32, render_config: RenderConfig) -> Result<()> {
    let report = load(config);
    Renderer::with_config(render_config).emit(&show_entry(&report, id));
    Ok(())
}

/// Run status command
pub fn run_status(config: &SourceConfig, render_config: RenderConfig) -> Result<()> {
    let report = load(config);
    Renderer::with_config(render_config).emit(&load_status(&report));
    Ok(())
}

/// Run lint command
pub fn run_lint(config: &SourceConfig, render_config: RenderConfig) -> Result<()> {
    let result_set = lint_source(config, &HttpFetcher::new(config.timeout))?;
    println!("{}", Renderer::with_config(render_config).render(&result_set));
    Ok(())
}
