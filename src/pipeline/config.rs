//! Configuration for the ingestion run.
//!
//! Every input the run depends on (parameters file, dataset location,
//! output directory, identifier column, seed) is held here instead of being
//! hardcoded in the steps.

use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::{DataSource, DEFAULT_ID_COLUMN, DEFAULT_SEED};

/// Dataset fetched when no source is configured.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/campusx-official/jupyter-masterclass/main/tweet_emotions.csv";

/// Parameters file read when none is configured.
pub const DEFAULT_PARAMS_PATH: &str = "params.yaml";

/// Base output directory; partitions land in `<data_dir>/raw/`.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration for [`IngestionPipeline`](super::IngestionPipeline).
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionConfig {
    /// YAML file holding `data_ingestion.test_size`.
    pub params_path: PathBuf,
    /// Where the raw dataset is read from.
    pub source: DataSource,
    /// Base output directory.
    pub data_dir: PathBuf,
    /// Identifier column dropped before the split.
    pub id_column: String,
    /// Seed for the train/test permutation.
    pub seed: u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            params_path: PathBuf::from(DEFAULT_PARAMS_PATH),
            source: DataSource::Remote(DEFAULT_SOURCE.to_string()),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            id_column: DEFAULT_ID_COLUMN.to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

impl IngestionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `INGEST_PARAMS_PATH`: Parameters file (default: params.yaml)
    /// - `INGEST_SOURCE`: Dataset path or URL (default: tweet_emotions.csv URL)
    /// - `INGEST_DATA_DIR`: Base output directory (default: ./data)
    /// - `INGEST_ID_COLUMN`: Identifier column to drop (default: tweet_id)
    /// - `INGEST_SEED`: Split seed (default: 42)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("INGEST_PARAMS_PATH") {
            config.params_path = PathBuf::from(val);
        }

        if let Some(val) = lookup("INGEST_SOURCE") {
            config.source = parse_env_value(&val, "INGEST_SOURCE")?;
        }

        if let Some(val) = lookup("INGEST_DATA_DIR") {
            config.data_dir = PathBuf::from(val);
        }

        if let Some(val) = lookup("INGEST_ID_COLUMN") {
            config.id_column = val;
        }

        if let Some(val) = lookup("INGEST_SEED") {
            config.seed = parse_env_value(&val, "INGEST_SEED")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any values are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.params_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "params_path cannot be empty".to_string(),
            ));
        }

        let source_empty = match &self.source {
            DataSource::Local(path) => path.as_os_str().is_empty(),
            DataSource::Remote(url) => url.trim().is_empty(),
        };
        if source_empty {
            return Err(ConfigError::ValidationFailed(
                "source cannot be empty".to_string(),
            ));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "data_dir cannot be empty".to_string(),
            ));
        }

        if self.id_column.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "id_column cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder method to set the parameters file.
    pub fn with_params_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_path = path.into();
        self
    }

    /// Builder method to set the dataset source.
    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    /// Builder method to set the base output directory.
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Builder method to set the identifier column.
    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    /// Builder method to set the split seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Parse an environment variable value into a type.
fn parse_env_value<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("could not parse '{}'", value),
    })
}
