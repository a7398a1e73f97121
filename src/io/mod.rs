mod csv_io;
mod json_io;

use std::path::Path;

use crate::error::EdaError;
use crate::models::Dataset;

pub use csv_io::{
    read_csv, read_csv_from_bytes, write_correlation, write_missing_table, LoadOptions,
};
pub use json_io::write_json;

/// Trait for loading a dataset from a file.
pub trait DatasetReader {
    fn read(&self, path: &Path) -> Result<Dataset, EdaError>;
}

/// Delimited text format with a header row.
#[derive(Debug, Default)]
pub struct CsvFormat {
    pub options: LoadOptions,
}

impl DatasetReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<Dataset, EdaError> {
        read_csv(path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{correlation_matrix, missing_table};
    use crate::models::{Column, Dataset};

    fn sample_dataset() -> Dataset {
        Dataset::new(
            "IO Trait Test",
            vec![
                Column::float("a", &[Some(1.0), None, None, None, Some(5.0)]),
                Column::float("b", &[Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_csv_trait_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.tsv");
        std::fs::write(&path, "a\tb\n1\tx\n2\ty\n").unwrap();

        let reader: &dyn DatasetReader = &CsvFormat {
            options: LoadOptions {
                delimiter: b'\t',
                parse_dates: false,
            },
        };
        let loaded = reader.read(&path).unwrap();

        assert_eq!(loaded.n_rows(), 2);
        assert_eq!(loaded.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_csv_format_default() {
        let format = CsvFormat::default();
        assert_eq!(format.options.delimiter, b',');
        assert!(!format.options.parse_dates);
    }

    #[test]
    fn test_missing_table_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_values.csv");
        write_missing_table(&missing_table(&sample_dataset()), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(content.trim_end(), @r"
        column,missing_count,missing_percent
        a,3,60.0
        b,1,20.0
        ");
    }

    #[test]
    fn test_correlation_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("correlation.csv");
        write_correlation(&correlation_matrix(&sample_dataset()), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(",a,b"));
        assert!(lines.next().unwrap().starts_with("a,1,"));
        assert!(lines.next().unwrap().ends_with(",1"));
        assert!(lines.next().is_none());
    }
}
