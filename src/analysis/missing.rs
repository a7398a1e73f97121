use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{percent, share};
use crate::models::Dataset;

/// Missing-value statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub column: String,
    pub missing_count: usize,
    /// Percentage of rows that are null (0-100)
    pub missing_percent: f64,
}

/// Columns with at least one null, most-missing first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingReport {
    pub entries: Vec<MissingEntry>,
}

impl MissingReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of missing counts over all reported columns.
    pub fn total_missing(&self) -> usize {
        self.entries.iter().map(|e| e.missing_count).sum()
    }
}

/// Build the missing-value table.
///
/// Columns without nulls are left out. Entries are sorted by descending
/// `missing_percent`; ties keep the original column order. A dataset with no
/// rows yields an empty report.
pub fn missing_table(dataset: &Dataset) -> MissingReport {
    let n = dataset.n_rows();
    let mut entries: Vec<MissingEntry> = dataset
        .columns()
        .iter()
        .map(|c| (c.name(), c.null_count()))
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| MissingEntry {
            column: name.to_string(),
            missing_count: count,
            missing_percent: percent(count, n),
        })
        .collect();

    // sort_by is stable, so equal percentages stay in column order
    entries.sort_by(|a, b| b.missing_percent.total_cmp(&a.missing_percent));

    debug!(columns = entries.len(), "computed missing table");
    MissingReport { entries }
}

/// Names of columns whose null share is at or above `min_missing_share`, in column order.
///
/// The comparison is inclusive, unlike the quality-flag thresholds. With no
/// rows every share is 0.
pub fn problematic_columns(dataset: &Dataset, min_missing_share: f64) -> Vec<String> {
    let n = dataset.n_rows();
    dataset
        .columns()
        .iter()
        .filter(|c| share(c.null_count(), n) >= min_missing_share)
        .map(|c| c.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn sample() -> Dataset {
        Dataset::new(
            "m",
            vec![
                Column::float("a", &[Some(1.0), None, None, None, Some(5.0)]),
                Column::float("b", &[Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]),
                Column::float("c", &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_missing_table_excludes_complete_columns() {
        let report = missing_table(&sample());
        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].column, "a");
        assert_eq!(report.entries[0].missing_count, 3);
        assert!((report.entries[0].missing_percent - 60.0).abs() < 1e-9);
        assert_eq!(report.entries[1].column, "b");
        assert!((report.entries[1].missing_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_table_ties_keep_column_order() {
        let ds = Dataset::new(
            "t",
            vec![
                Column::int("x", &[None, Some(1)]),
                Column::int("y", &[None, None]),
                Column::int("z", &[Some(1), None]),
            ],
        )
        .unwrap();
        let names: Vec<String> = missing_table(&ds)
            .entries
            .into_iter()
            .map(|e| e.column)
            .collect();
        assert_eq!(names, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_missing_table_total() {
        let ds = sample();
        assert_eq!(missing_table(&ds).total_missing(), ds.null_count());
    }

    #[test]
    fn test_missing_table_empty_dataset() {
        assert!(missing_table(&Dataset::empty("e")).is_empty());
    }

    #[test]
    fn test_problematic_columns() {
        let ds = sample();
        assert_eq!(problematic_columns(&ds, 0.3), vec!["a"]);
        assert_eq!(problematic_columns(&ds, 0.1), vec!["a", "b"]);
    }

    #[test]
    fn test_problematic_columns_inclusive_threshold() {
        let ds = sample();
        assert_eq!(problematic_columns(&ds, 0.2), vec!["a", "b"]);
        assert_eq!(problematic_columns(&ds, 0.6), vec!["a"]);
    }

    #[test]
    fn test_problematic_columns_out_of_range() {
        let ds = sample();
        assert_eq!(problematic_columns(&ds, -1.0).len(), 3);
        assert!(problematic_columns(&ds, 1.5).is_empty());
    }

    #[test]
    fn test_problematic_columns_no_rows() {
        let ds = Dataset::new("e", vec![Column::int("a", &[])]).unwrap();
        assert!(problematic_columns(&ds, 0.1).is_empty());
        assert_eq!(problematic_columns(&ds, 0.0), vec!["a"]);
    }
}
