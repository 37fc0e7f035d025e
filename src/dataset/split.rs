//! Seeded train/test split.
//!
//! Follows the usual shuffle-split convention: the test partition gets
//! `ceil(test_size * n)` rows and the train partition the remainder. Rows
//! are assigned by a seeded permutation, so the same seed over the same
//! table always yields the same partitions.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error};

use super::table::Table;
use crate::error::SplitError;

/// Seed used by the ingestion run unless overridden.
pub const DEFAULT_SEED: u64 = 42;

/// Row counts of a split, computed before any row is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    pub train: usize,
    pub test: usize,
}

impl SplitSizes {
    /// Computes partition sizes for `n_samples` rows.
    pub fn compute(n_samples: usize, test_size: f64) -> Result<Self, SplitError> {
        if !test_size.is_finite() || test_size <= 0.0 || test_size >= 1.0 {
            return Err(SplitError::InvalidTestSize(test_size));
        }

        let test = (test_size * n_samples as f64).ceil() as usize;
        let test = test.min(n_samples);
        let train = n_samples - test;

        if train == 0 || test == 0 {
            return Err(SplitError::EmptyPartition {
                n_samples,
                test_size,
                train,
                test,
            });
        }
        Ok(Self { train, test })
    }
}

/// Splits `table` into `(train, test)` using a permutation seeded by `seed`.
///
/// Both partitions keep the table's columns. Rows appear in permutation
/// order; their content is unchanged.
pub fn train_test_split(
    table: &Table,
    test_size: f64,
    seed: u64,
) -> Result<(Table, Table), SplitError> {
    let sizes = SplitSizes::compute(table.len(), test_size)
        .inspect_err(|e| error!(error = %e, rows = table.len(), "Failed to split the dataset"))?;

    let mut indices: Vec<usize> = (0..table.len()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(sizes.test);
    let train = table.take_rows(train_idx);
    let test = table.take_rows(test_idx);

    debug!(
        train = train.len(),
        test = test.len(),
        seed = seed,
        "Dataset split into train and test partitions"
    );
    Ok((train, test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn numbered_table(n: usize) -> Table {
        let columns = vec!["content".to_string(), "sentiment".to_string()];
        let rows = (0..n)
            .map(|i| vec![format!("tweet {}", i), format!("label{}", i % 3)])
            .collect();
        Table::new(columns, rows).unwrap()
    }

    fn contents(table: &Table) -> Vec<String> {
        table.rows().iter().map(|row| row[0].clone()).collect()
    }

    #[test]
    fn test_split_sizes_round_test_up() {
        assert_eq!(
            SplitSizes::compute(10, 0.2).unwrap(),
            SplitSizes { train: 8, test: 2 }
        );
        assert_eq!(
            SplitSizes::compute(10, 0.25).unwrap(),
            SplitSizes { train: 7, test: 3 }
        );
        assert_eq!(
            SplitSizes::compute(3, 0.1).unwrap(),
            SplitSizes { train: 2, test: 1 }
        );
    }

    #[test]
    fn test_invalid_test_size() {
        for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SplitSizes::compute(10, bad),
                Err(SplitError::InvalidTestSize(_))
            ));
        }
    }

    #[test]
    fn test_empty_partitions_rejected() {
        assert!(matches!(
            SplitSizes::compute(0, 0.2),
            Err(SplitError::EmptyPartition { .. })
        ));
        assert!(matches!(
            SplitSizes::compute(1, 0.2),
            Err(SplitError::EmptyPartition { train: 0, test: 1, .. })
        ));
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover_all_rows() {
        let table = numbered_table(57);
        let (train, test) = train_test_split(&table, 0.3, DEFAULT_SEED).unwrap();

        assert_eq!(train.len() + test.len(), table.len());
        assert_eq!(train.columns(), table.columns());
        assert_eq!(test.columns(), table.columns());

        let train_set: HashSet<String> = contents(&train).into_iter().collect();
        let test_set: HashSet<String> = contents(&test).into_iter().collect();
        assert!(train_set.is_disjoint(&test_set));

        let all: HashSet<String> = contents(&table).into_iter().collect();
        let union: HashSet<String> = train_set.union(&test_set).cloned().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_rows_are_unchanged() {
        let table = numbered_table(20);
        let (train, test) = train_test_split(&table, 0.5, DEFAULT_SEED).unwrap();
        for row in train.rows().iter().chain(test.rows()) {
            assert!(table.rows().contains(row));
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let table = numbered_table(100);
        let (train_a, test_a) = train_test_split(&table, 0.2, DEFAULT_SEED).unwrap();
        let (train_b, test_b) = train_test_split(&table, 0.2, DEFAULT_SEED).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_different_seed_changes_membership() {
        let table = numbered_table(100);
        let (_, test_a) = train_test_split(&table, 0.2, 42).unwrap();
        let (_, test_b) = train_test_split(&table, 0.2, 7).unwrap();
        assert_ne!(contents(&test_a), contents(&test_b));
    }
}
