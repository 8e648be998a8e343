//! tripinfo - Look up trip questions and answers from a published spreadsheet
//!
//! tripinfo provides:
//! - A tolerant CSV parser for the sheet export
//! - Text and category filtering
//! - A built-in fallback when the sheet cannot be loaded
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod core;
mod lookup;
mod sheet;
mod source;

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "tripinfo=debug"
    } else if quiet {
        "tripinfo=error"
    } else {
        "tripinfo=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    cli::run(cli)
}
