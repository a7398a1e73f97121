use serde::{Deserialize, Serialize};

use crate::models::Dataset;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Declared type label of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDtype {
    pub column: String,
    pub dtype: String,
}

/// Shape, types and memory footprint of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    /// Column names in original order
    pub columns: Vec<String>,
    /// Type label per column, in original order
    pub dtypes: Vec<ColumnDtype>,
    /// Estimated memory usage in megabytes, text contents included
    pub memory_usage_mb: f64,
}

/// Summarize row/column counts, type labels and memory footprint.
pub fn summarize_dataset(dataset: &Dataset) -> DatasetSummary {
    let columns = dataset
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let dtypes = dataset
        .columns()
        .iter()
        .map(|c| ColumnDtype {
            column: c.name().to_string(),
            dtype: c.dtype().label().to_string(),
        })
        .collect();

    DatasetSummary {
        n_rows: dataset.n_rows(),
        n_cols: dataset.n_cols(),
        columns,
        dtypes,
        memory_usage_mb: dataset.memory_bytes() as f64 / BYTES_PER_MB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    #[test]
    fn test_summarize_dataset() {
        let ds = Dataset::new(
            "s",
            vec![
                Column::int("a", &[Some(1), Some(2), Some(3)]),
                Column::text("b", &[Some("x"), Some("y"), Some("z")]),
            ],
        )
        .unwrap();
        let summary = summarize_dataset(&ds);
        assert_eq!(summary.n_rows, 3);
        assert_eq!(summary.n_cols, 2);
        assert_eq!(summary.columns, vec!["a", "b"]);
        assert_eq!(summary.dtypes[0].dtype, "int64");
        assert_eq!(summary.dtypes[1].dtype, "object");
        assert!(summary.memory_usage_mb > 0.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_dataset(&Dataset::empty("e"));
        assert_eq!(summary.n_rows, 0);
        assert_eq!(summary.n_cols, 0);
        assert!(summary.columns.is_empty());
        assert!(summary.dtypes.is_empty());
        assert_eq!(summary.memory_usage_mb, 0.0);
    }

    #[test]
    fn test_summarize_header_only() {
        let ds = Dataset::new("h", vec![Column::int("a", &[]), Column::text("b", &[])]).unwrap();
        let summary = summarize_dataset(&ds);
        assert_eq!(summary.n_cols, 2);
        assert_eq!(summary.memory_usage_mb, 0.0);
    }
}
