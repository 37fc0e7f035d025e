//! Dataset preprocessing before the split.

use tracing::{error, info};

use super::table::Table;
use crate::error::PreprocessError;

/// Identifier column dropped from the tweet-emotions dataset.
pub const DEFAULT_ID_COLUMN: &str = "tweet_id";

/// Removes `id_column` from `table` in place. All other columns and all
/// rows pass through unchanged.
///
/// # Errors
///
/// [`PreprocessError::MissingColumn`] if the table has no such column.
pub fn preprocess(table: &mut Table, id_column: &str) -> Result<(), PreprocessError> {
    info!(column = id_column, "Processing the dataset");

    if !table.remove_column(id_column) {
        let err = PreprocessError::MissingColumn(id_column.to_string());
        error!(error = %err, columns = ?table.columns(), "Missing column in the dataset");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweets() -> Table {
        let data = "tweet_id,sentiment,content\n\
                    1956967341,empty,@tiffanylue i know  i was listenin to bad habit earlier\n\
                    1956967666,sadness,Layin n bed with a headache  ughhhh...waitin on your call...\n";
        Table::from_csv_reader(data.as_bytes(), "tweets").unwrap()
    }

    #[test]
    fn test_drops_id_column_only() {
        let original = tweets();
        let mut table = original.clone();
        preprocess(&mut table, DEFAULT_ID_COLUMN).unwrap();

        assert_eq!(table.columns(), ["sentiment", "content"]);
        assert_eq!(table.len(), original.len());
        for (kept, before) in table.rows().iter().zip(original.rows()) {
            assert_eq!(kept.as_slice(), &before[1..]);
        }
    }

    #[test]
    fn test_missing_column_fails() {
        let mut table = tweets();
        preprocess(&mut table, DEFAULT_ID_COLUMN).unwrap();

        let result = preprocess(&mut table, DEFAULT_ID_COLUMN);
        assert!(matches!(result, Err(PreprocessError::MissingColumn(c)) if c == "tweet_id"));
        assert_eq!(table.columns(), ["sentiment", "content"]);
    }

    #[test]
    fn test_custom_id_column() {
        let mut table = tweets();
        preprocess(&mut table, "content").unwrap();
        assert_eq!(table.columns(), ["tweet_id", "sentiment"]);
    }
}
