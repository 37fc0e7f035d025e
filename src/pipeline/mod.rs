//! Pipeline orchestration for the ingestion step.
//!
//! # Pipeline Flow
//!
//! 1. **Parameters**: `data_ingestion.test_size` is read from the YAML file
//! 2. **Load**: the raw CSV is read from disk or fetched over HTTP
//! 3. **Preprocess**: the identifier column is dropped
//! 4. **Split**: rows are partitioned with a seeded permutation
//! 5. **Persist**: `raw/train.csv` and `raw/test.csv` are written
//!
//! # Example
//!
//! ```rust,ignore
//! use tweet_ingest::pipeline::{IngestionConfig, IngestionPipeline};
//!
//! let config = IngestionConfig::from_env()?.with_data_dir("./data");
//! let report = IngestionPipeline::new(config).run().await?;
//! println!("{} train / {} test rows", report.train_rows, report.test_rows);
//! ```

pub mod config;
pub mod orchestrator;

pub use config::{
    ConfigError, IngestionConfig, DEFAULT_DATA_DIR, DEFAULT_PARAMS_PATH, DEFAULT_SOURCE,
};
pub use orchestrator::{IngestionPipeline, IngestionReport};
