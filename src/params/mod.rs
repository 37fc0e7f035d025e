//! Run parameters for the ingestion step.
//!
//! Parameters live in a YAML document shared with the other stages of the
//! ML pipeline. Only the `data_ingestion` section is read here:
//!
//! ```yaml
//! data_ingestion:
//!   test_size: 0.2
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;
use tracing::{error, info};

use crate::error::ParamsError;

/// Top-level section holding the ingestion parameters.
pub const SECTION: &str = "data_ingestion";

/// Key of the test-set fraction inside [`SECTION`].
pub const TEST_SIZE_KEY: &str = "test_size";

/// Parameters consumed by the ingestion step. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngestionParams {
    /// Fraction of rows assigned to the test partition, in (0, 1).
    pub test_size: f64,
}

impl IngestionParams {
    /// Parses ingestion parameters from YAML text.
    ///
    /// `origin` names the document in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, ParamsError> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| ParamsError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        let key_path = format!("{}.{}", SECTION, TEST_SIZE_KEY);
        let raw = document
            .get(SECTION)
            .and_then(|section| section.get(TEST_SIZE_KEY))
            .ok_or_else(|| ParamsError::MissingKey {
                path: origin.to_string(),
                key: key_path.clone(),
            })?;

        let test_size = raw.as_f64().ok_or_else(|| ParamsError::InvalidValue {
            key: key_path.clone(),
            message: format!("expected a number, got {}", describe(raw)),
        })?;

        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ParamsError::InvalidValue {
                key: key_path,
                message: format!("must be between 0 and 1 (exclusive), got {}", test_size),
            });
        }

        Ok(Self { test_size })
    }
}

/// Loads the ingestion parameters from the YAML file at `path`.
///
/// # Errors
///
/// - [`ParamsError::NotFound`] if the file does not exist.
/// - [`ParamsError::Parse`] if the document is not valid YAML.
/// - [`ParamsError::MissingKey`] if `data_ingestion.test_size` is absent.
/// - [`ParamsError::InvalidValue`] if the value is not a fraction in (0, 1).
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<IngestionParams, ParamsError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    info!(path = %path_str, "Loading parameters");

    let content = fs::read_to_string(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ParamsError::NotFound {
                path: path_str.clone(),
            },
            _ => ParamsError::Io(e),
        })
        .inspect_err(|e| error!(path = %path_str, error = %e, "Failed to read parameters file"))?;

    let params = IngestionParams::from_yaml_str(&content, &path_str)
        .inspect_err(|e| error!(path = %path_str, error = %e, "Failed to load parameters"))?;

    info!(test_size = params.test_size, "Parameters loaded successfully");
    Ok(params)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
