//! Orchestrator for the ingestion run.
//!
//! Sequences the steps strictly in order:
//! load parameters -> load dataset -> preprocess -> split -> persist.
//! The first failing step ends the run; nothing written earlier is rolled
//! back.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{error, info, info_span, Instrument};

use crate::dataset::{load_data, preprocess, save_data, train_test_split};
use crate::error::IngestionError;
use crate::params::load_params;

use super::config::IngestionConfig;

/// Summary of a successful ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionReport {
    /// Test fraction read from the parameters file.
    pub test_size: f64,
    /// Rows in the dataset after preprocessing.
    pub total_rows: usize,
    /// Rows written to the train file.
    pub train_rows: usize,
    /// Rows written to the test file.
    pub test_rows: usize,
    /// Columns kept in both files.
    pub columns: Vec<String>,
    /// Path of the train file.
    pub train_path: PathBuf,
    /// Path of the test file.
    pub test_path: PathBuf,
    /// Wall-clock duration of the run.
    #[serde(skip)]
    pub duration: Duration,
}

/// Runs the ingestion step for one configuration.
#[derive(Debug, Clone)]
pub struct IngestionPipeline {
    config: IngestionConfig,
}

impl IngestionPipeline {
    /// Creates a pipeline for `config`.
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// Executes every step once.
    ///
    /// All log records emitted by the steps are tagged with the
    /// `data_ingestion` span.
    pub async fn run(&self) -> Result<IngestionReport, IngestionError> {
        let span = info_span!("data_ingestion");
        self.run_steps()
            .instrument(span)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to complete the data ingestion process"))
    }

    async fn run_steps(&self) -> Result<IngestionReport, IngestionError> {
        let started = Instant::now();
        let config = &self.config;

        let params = load_params(&config.params_path)?;
        let mut table = load_data(&config.source).await?;
        preprocess(&mut table, &config.id_column)?;
        let (train, test) = train_test_split(&table, params.test_size, config.seed)?;
        let saved = save_data(&train, &test, &config.data_dir)?;

        let report = IngestionReport {
            test_size: params.test_size,
            total_rows: table.len(),
            train_rows: train.len(),
            test_rows: test.len(),
            columns: table.columns().to_vec(),
            train_path: saved.train_path,
            test_path: saved.test_path,
            duration: started.elapsed(),
        };

        info!(
            train_rows = report.train_rows,
            test_rows = report.test_rows,
            duration_ms = report.duration.as_millis() as u64,
            "Data ingestion completed"
        );
        Ok(report)
    }
}
