//! Writes the train/test partitions to disk.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::table::Table;
use crate::error::PersistError;

/// Subdirectory of the data directory that receives the partitions.
pub const RAW_SUBDIR: &str = "raw";

/// File name of the train partition.
pub const TRAIN_FILE: &str = "train.csv";

/// File name of the test partition.
pub const TEST_FILE: &str = "test.csv";

/// Paths of the files written by [`save_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSplits {
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

/// Saves both partitions under `<data_dir>/raw/` as `train.csv` and
/// `test.csv`, overwriting any previous files.
///
/// The directory is created if needed. Files have a header row and no
/// index column.
pub fn save_data(train: &Table, test: &Table, data_dir: &Path) -> Result<SavedSplits, PersistError> {
    info!(data_dir = %data_dir.display(), "Starting to save the data");

    let raw_dir = data_dir.join(RAW_SUBDIR);
    let result = fs::create_dir_all(&raw_dir)
        .map_err(|source| PersistError::CreateDir {
            path: raw_dir.display().to_string(),
            source,
        })
        .and_then(|()| {
            let train_path = raw_dir.join(TRAIN_FILE);
            let test_path = raw_dir.join(TEST_FILE);
            write_table(train, &train_path)?;
            write_table(test, &test_path)?;
            Ok(SavedSplits {
                train_path,
                test_path,
            })
        });

    let saved = result.inspect_err(|e| {
        error!(error = %e, "Unexpected error occurred while saving the data")
    })?;

    debug!(path = %raw_dir.display(), "Train and test data saved");
    Ok(saved)
}

fn write_table(table: &Table, path: &Path) -> Result<(), PersistError> {
    let write_error = |message: String| PersistError::Write {
        path: path.display().to_string(),
        message,
    };

    let file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    table
        .write_csv(BufWriter::new(file))
        .map_err(|e| write_error(e.to_string()))
}
