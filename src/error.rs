//! Error types for tweet-ingest operations.
//!
//! Each pipeline step owns its error enum:
//! - Run parameter loading
//! - Dataset loading (local file or remote URL)
//! - Preprocessing
//! - Train/test splitting
//! - Persisting the partitions
//!
//! [`IngestionError`] wraps all of them for the orchestrator.

use thiserror::Error;

/// Errors that can occur while loading run parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("the file {path} was not found")]
    NotFound { path: String },

    #[error("failed to parse the YAML file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("missing key '{key}' in {path}")]
    MissingKey { path: String, key: String },

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file {path} was not found")]
    NotFound { path: String },

    #[error("failed to parse the CSV data from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while preprocessing the dataset.
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("missing column in the dataset: '{0}'")]
    MissingColumn(String),
}

/// Errors that can occur while splitting the dataset.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("test_size must be a float in the open interval (0, 1), got {0}")]
    InvalidTestSize(f64),

    #[error(
        "with n_samples={n_samples} and test_size={test_size}, the resulting partitions \
         would be train={train}, test={test}; both must be non-empty"
    )]
    EmptyPartition {
        n_samples: usize,
        test_size: f64,
        train: usize,
        test: usize,
    },
}

/// Errors that can occur while writing the partitions to disk.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Any failure of the ingestion run.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
