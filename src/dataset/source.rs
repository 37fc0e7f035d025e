//! Dataset sources: a local CSV file or a remote URL.

use std::fmt;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, error, info};

use super::table::Table;
use crate::error::LoadError;

/// User agent sent with remote fetches.
const USER_AGENT: &str = concat!("tweet-ingest/", env!("CARGO_PKG_VERSION"));

/// Where the raw dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A CSV file on the local filesystem.
    Local(PathBuf),
    /// An `http://` or `https://` URL serving CSV text.
    Remote(String),
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(s.to_string())
        } else {
            Self::Local(PathBuf::from(s))
        }
    }
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Loads the dataset from `source` into a [`Table`].
///
/// Column order and row order follow the source. Remote sources are
/// fetched with a single GET request; there is no retry.
pub async fn load_data(source: &DataSource) -> Result<Table, LoadError> {
    info!(source = %source, "Starting to load data");

    let result = match source {
        DataSource::Local(path) => load_local(path),
        DataSource::Remote(url) => load_remote(url).await,
    };

    let table = result.inspect_err(|e| match e {
        LoadError::Parse { .. } => error!(error = %e, "Failed to parse the CSV data"),
        _ => error!(error = %e, "Unexpected error occurred while loading the data"),
    })?;

    debug!(
        source = %source,
        rows = table.len(),
        columns = table.columns().len(),
        "Data loaded successfully"
    );
    Ok(table)
}

fn load_local(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io(e),
    })?;
    Table::from_csv_reader(file, &path.display().to_string())
}

async fn load_remote(url: &str) -> Result<Table, LoadError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    debug!(url = url, size = body.len(), "Dataset downloaded");

    Table::from_csv_reader(body.as_ref(), url)
}
