//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::lookup::filter::{CategoryFilter, ALL_CATEGORIES};
use crate::source::config::{SourceConfig, DEFAULT_TIMEOUT_SECS};

/// tripinfo - look up trip info from a published spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "tripinfo")]
#[command(
    author,
    version,
    about,
    long_about = r#"tripinfo loads question/answer entries from a spreadsheet published as CSV
and lets you search them by text and category.

The sheet needs a header row; the columns category, question, answer and keywords
are used (in any order, any case). Other columns are ignored.

If no sheet is configured, or it cannot be fetched, a small built-in set of
entries is shown instead.

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown cards
- raw: tab-separated lines

Examples:
    tripinfo --url https://docs.google.com/.../pub?output=csv list bus
    tripinfo --file sheet.csv list --category Hotel --expand
    tripinfo --format md categories
    tripinfo show 104
    tripinfo --file sheet.csv lint
"#
)]
pub struct Cli {
    /// URL of the sheet's CSV export.
    #[arg(
        long,
        global = true,
        env = "TRIPINFO_SHEET_URL",
        value_name = "URL",
        long_help = "URL of the spreadsheet's published CSV export.\n\n\
Falls back to the URL baked in at build time (TRIPINFO_SHEET_URL). Pass an\n\
empty value to disable the remote sheet."
    )]
    pub url: Option<String>,

    /// Read the sheet from a local CSV file instead.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        conflicts_with = "url",
        long_help = "Read the sheet from a local CSV file instead of fetching it.\n\n\
The file is parsed exactly like the remote export."
    )]
    pub file: Option<PathBuf>,

    /// Use the built-in entries only.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Fetch timeout in seconds.
    #[arg(
        long,
        global = true,
        env = "TRIPINFO_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_name = "SECS"
    )]
    pub timeout: u64,

    /// Output format (jsonl/json/md/raw).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no notice banner, errors only in logs).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries matching a search term and category.
    #[command(
        long_about = "List entries whose question, answer or keywords contain SEARCH\n\
(case-insensitive), limited to one category unless it is 'All'.\n\n\
Entries are collapsed (question only) unless --expand is given.\n\n\
Examples:\n\
  tripinfo list\n\
  tripinfo list bus --category Travel\n\
  tripinfo list --expand\n"
    )]
    List {
        /// Free-text search term.
        #[arg(value_name = "SEARCH", default_value = "")]
        search: String,

        /// Only show entries in this category.
        #[arg(long, value_name = "NAME", default_value = ALL_CATEGORIES)]
        category: String,

        /// Include answers.
        #[arg(long)]
        expand: bool,
    },

    /// List categories with their entry counts.
    Categories,

    /// Show one entry, expanded.
    Show {
        /// Entry id.
        #[arg(value_name = "ID")]
        id: u32,
    },

    /// Report problems in the configured sheet.
    #[command(
        long_about = "Fetch or read the configured sheet and report unknown or missing\n\
columns, short or overlong rows, and unbalanced quotes.\n\n\
Linting never changes how entries are parsed; it only explains them."
    )]
    Lint,

    /// Show where entries were loaded from.
    Status,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty).quiet(cli.quiet);

    let config = SourceConfig::resolve(
        cli.url.as_deref(),
        cli.file.as_deref(),
        cli.offline,
        cli.timeout,
    );

    match cli.command {
        Commands::List {
            search,
            category,
            expand,
        } => {
            let category: CategoryFilter = category.parse().unwrap_or_default();
            crate::lookup::api::run_list(&config, &search, &category, expand, render_config)
        }

        Commands::Categories => crate::lookup::api::run_categories(&config, render_config),

        Commands::Show { id } => crate::lookup::api::run_show(&config, id, render_config),

        Commands::Lint => crate::lookup::api::run_lint(&config, render_config),

        Commands::Status => crate::lookup::api::run_status(&config, render_config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::config::DataSource;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["tripinfo", "list"]).unwrap();
        match cli.command {
            Commands::List {
                search,
                category,
                expand,
            } => {
                assert_eq!(search, "");
                assert_eq!(category, "All");
                assert!(!expand);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tripinfo", "list", "bus", "--file", "sheet.csv", "--format", "md",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("sheet.csv")));
        assert_eq!(cli.format, "md");

        let config = SourceConfig::resolve(cli.url.as_deref(), cli.file.as_deref(), cli.offline, cli.timeout);
        assert_eq!(config.source, DataSource::File(PathBuf::from("sheet.csv")));
    }

    #[test]
    fn test_file_conflicts_with_url() {
        let result = Cli::try_parse_from([
            "tripinfo",
            "--url",
            "https://example.com/sheet.csv",
            "--file",
            "sheet.csv",
            "list",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["tripinfo", "show", "abc"]).is_err());
        assert!(Cli::try_parse_from(["tripinfo", "show", "104"]).is_ok());
    }
}
