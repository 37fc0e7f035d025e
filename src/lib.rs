//! tweet-ingest: data ingestion step of a tweet emotion classification pipeline.
//!
//! Loads the test fraction from a YAML parameters file, reads the raw
//! dataset, drops the identifier column and writes a seeded train/test
//! split as CSV files.

pub mod cli;
pub mod dataset;
pub mod error;
pub mod params;
pub mod pipeline;

// Re-export commonly used error types
pub use error::{
    IngestionError, LoadError, ParamsError, PersistError, PreprocessError, SplitError,
};
