//! Dataset handling for the ingestion step.
//!
//! The steps run in this order:
//!
//! 1. **Load**: read a CSV file or fetch it over HTTP ([`load_data`])
//! 2. **Preprocess**: drop the identifier column ([`preprocess`])
//! 3. **Split**: seeded train/test partition ([`train_test_split`])
//! 4. **Persist**: write `raw/train.csv` and `raw/test.csv` ([`save_data`])
//!
//! Every step works on the in-memory [`Table`].

pub mod persist;
pub mod preprocess;
pub mod source;
pub mod split;
pub mod table;

pub use persist::{save_data, SavedSplits, RAW_SUBDIR, TEST_FILE, TRAIN_FILE};
pub use preprocess::{preprocess, DEFAULT_ID_COLUMN};
pub use source::{load_data, DataSource};
pub use split::{train_test_split, SplitSizes, DEFAULT_SEED};
pub use table::Table;
