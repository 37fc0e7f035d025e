//! Command-line interface for tweet-ingest.
//!
//! Provides the `ingest` command that runs the ingestion step and the
//! `show-params` diagnostic command.

mod commands;

pub use commands::{
    parse_cli, report_outcome, run_with_cli, Cli, Commands, IngestArgs, ShowParamsArgs,
};
