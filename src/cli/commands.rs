//! CLI command definitions for tweet-ingest.
//!
//! The `ingest` command runs the whole ingestion step; `show-params` only
//! resolves the run parameters.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::dataset::DataSource;
use crate::params::load_params;
use crate::pipeline::{IngestionConfig, IngestionPipeline, IngestionReport};

/// Ingests the tweet-emotions dataset into a seeded train/test split.
#[derive(Parser)]
#[command(name = "tweet-ingest")]
#[command(about = "Fetch a labeled dataset, drop its id column and write a train/test split")]
#[command(version)]
#[command(
    long_about = "tweet-ingest loads data_ingestion.test_size from a YAML parameters file, reads a CSV dataset from a path or URL, drops the identifier column and writes <data-dir>/raw/train.csv and <data-dir>/raw/test.csv.\n\nExample usage:\n  tweet-ingest ingest --params params.yaml --data-dir ./data"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run the ingestion step: load, preprocess, split and persist.
    #[command(alias = "run")]
    Ingest(IngestArgs),

    /// Print the run parameters resolved from the parameters file.
    ShowParams(ShowParamsArgs),
}

/// Arguments for `tweet-ingest ingest`.
///
/// Flags left unset fall back to the `INGEST_*` environment variables and
/// then to the built-in defaults (see [`IngestionConfig::from_env`]).
#[derive(Parser, Debug)]
pub struct IngestArgs {
    /// YAML file holding data_ingestion.test_size [default: params.yaml].
    #[arg(short = 'p', long)]
    pub params: Option<PathBuf>,

    /// Dataset location: a local CSV path or an http(s) URL.
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Base output directory; files are written to <data-dir>/raw/ [default: ./data].
    #[arg(short = 'o', long)]
    pub data_dir: Option<PathBuf>,

    /// Identifier column dropped before the split [default: tweet_id].
    #[arg(long)]
    pub id_column: Option<String>,

    /// Seed for the train/test permutation [default: 42].
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output JSON summary.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl IngestArgs {
    /// Builds the run configuration: environment first, then flags.
    pub fn to_config(&self) -> anyhow::Result<IngestionConfig> {
        self.apply_to(IngestionConfig::from_env()?)
    }

    /// Overrides `base` with every flag that was given.
    pub fn apply_to(&self, base: IngestionConfig) -> anyhow::Result<IngestionConfig> {
        let mut config = base;
        if let Some(params) = &self.params {
            config = config.with_params_path(params.clone());
        }
        if let Some(source) = &self.source {
            config = config.with_source(DataSource::from(source.as_str()));
        }
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        if let Some(id_column) = &self.id_column {
            config = config.with_id_column(id_column.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for `tweet-ingest show-params`.
#[derive(Parser, Debug)]
pub struct ShowParamsArgs {
    /// YAML file holding data_ingestion.test_size [default: params.yaml].
    #[arg(short = 'p', long)]
    pub params: Option<PathBuf>,

    /// Output JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
///
/// This is the main entry point for the tweet-ingest CLI.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Ingest(args) => run_ingest_command(args).await,
        Commands::ShowParams(args) => run_show_params_command(args),
    }
}

/// Reports the outcome of a run and picks the process exit status.
///
/// Failures are printed as `Error: <message>` to `out` and map to a
/// failing status.
pub fn report_outcome<W: Write>(result: anyhow::Result<()>, out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing else can be reported if the output itself is gone.
            let _ = writeln!(out, "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_ingest_command(args: IngestArgs) -> anyhow::Result<()> {
    let config = args.to_config()?;
    let report = IngestionPipeline::new(config).run().await?;

    if args.json {
        println!("{}", render_json_summary(&report)?);
    } else {
        println!(
            "Wrote {} train rows to {}",
            report.train_rows,
            report.train_path.display()
        );
        println!(
            "Wrote {} test rows to {}",
            report.test_rows,
            report.test_path.display()
        );
        println!("  Columns: {}", report.columns.join(", "));
    }
    Ok(())
}

fn run_show_params_command(args: ShowParamsArgs) -> anyhow::Result<()> {
    let params_path = match args.params {
        Some(path) => path,
        None => IngestionConfig::from_env()?.params_path,
    };
    let params = load_params(&params_path)?;

    if args.json {
        let output = serde_json::json!({
            "params_path": params_path.display().to_string(),
            "test_size": params.test_size,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("data_ingestion.test_size = {}", params.test_size);
    }
    Ok(())
}

fn render_json_summary(report: &IngestionReport) -> anyhow::Result<String> {
    let mut output = serde_json::to_value(report)?;
    if let Some(fields) = output.as_object_mut() {
        fields.insert("status".to_string(), serde_json::json!("success"));
    }
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ingest_args(argv: &[&str]) -> IngestArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Ingest(args) => args,
            _ => panic!("expected ingest command"),
        }
    }

    #[test]
    fn test_ingest_defaults() {
        let cli = Cli::try_parse_from(["tweet-ingest", "ingest"]).unwrap();
        assert_eq!(cli.log_level, "info");
        let Commands::Ingest(args) = cli.command else {
            panic!("expected ingest command");
        };
        let config = args.apply_to(IngestionConfig::default()).unwrap();
        assert_eq!(config, IngestionConfig::default());
        assert!(matches!(config.source, DataSource::Remote(_)));
        assert!(!args.json);
    }

    #[test]
    fn test_run_alias_and_flags() {
        let cli = Cli::try_parse_from([
            "tweet-ingest",
            "run",
            "--source",
            "local.csv",
            "--data-dir",
            "out",
            "--seed",
            "7",
            "--json",
            "-l",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        let Commands::Ingest(args) = cli.command else {
            panic!("expected ingest command");
        };
        let config = args.apply_to(IngestionConfig::default()).unwrap();
        assert_eq!(config.source, DataSource::Local(PathBuf::from("local.csv")));
        assert_eq!(config.data_dir, PathBuf::from("out"));
        assert_eq!(config.seed, 7);
        assert!(args.json);
    }

    #[test]
    fn test_flags_override_environment() {
        let env = IngestionConfig::from_lookup(|key| match key {
            "INGEST_SEED" => Some("99".to_string()),
            "INGEST_DATA_DIR" => Some("env-out".to_string()),
            _ => None,
        })
        .unwrap();

        let args = ingest_args(&["tweet-ingest", "ingest", "--seed", "5"]);
        let config = args.apply_to(env).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.data_dir, PathBuf::from("env-out"));
    }

    #[test]
    fn test_empty_id_column_rejected() {
        let args = ingest_args(&["tweet-ingest", "ingest", "--id-column", ""]);
        assert!(args.apply_to(IngestionConfig::default()).is_err());
    }

    #[test]
    fn test_show_params_command() {
        let cli = Cli::try_parse_from(["tweet-ingest", "show-params", "-p", "conf.yaml"]).unwrap();
        match cli.command {
            Commands::ShowParams(args) => {
                assert_eq!(args.params, Some(PathBuf::from("conf.yaml")))
            }
            _ => panic!("expected show-params command"),
        }
    }

    #[test]
    fn test_report_outcome_success() {
        let mut out = Vec::new();
        let code = report_outcome(Ok(()), &mut out);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_outcome_failure() {
        let err = crate::ParamsError::NotFound {
            path: "/nonexistent.yaml".to_string(),
        };
        let mut out = Vec::new();
        let code = report_outcome(Err(err.into()), &mut out);
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: the file /nonexistent.yaml was not found\n"
        );
    }

    #[test]
    fn test_json_summary() {
        let report = IngestionReport {
            test_size: 0.2,
            total_rows: 10,
            train_rows: 8,
            test_rows: 2,
            columns: vec!["sentiment".to_string(), "content".to_string()],
            train_path: PathBuf::from("data/raw/train.csv"),
            test_path: PathBuf::from("data/raw/test.csv"),
            duration: Duration::from_millis(5),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json_summary(&report).unwrap()).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["train_rows"], 8);
        assert_eq!(json["test_rows"], 2);
        assert_eq!(json["train_path"], "data/raw/train.csv");
    }
}
