use crate::error::EdaError;

use super::{Column, Value};

/// An in-memory table of named, typed columns sharing one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Name or identifier for this dataset (usually the file stem)
    pub name: String,
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset, checking that every column has the same length and
    /// that every non-null cell matches its column's declared type.
    ///
    /// # Examples
    ///
    /// ```
    /// use eda_analyzer::{Column, Dataset};
    ///
    /// let ds = Dataset::new(
    ///     "example",
    ///     vec![
    ///         Column::int("a", &[Some(1), Some(2), None]),
    ///         Column::text("b", &[Some("x"), None, Some("z")]),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(ds.n_rows(), 3);
    /// assert_eq!(ds.n_cols(), 2);
    /// ```
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self, EdaError> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);

        for col in &columns {
            if col.len() != n_rows {
                return Err(EdaError::ShapeMismatch(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name(),
                    col.len(),
                    n_rows
                )));
            }
            if let Some(bad) = col
                .values()
                .iter()
                .flatten()
                .find(|v| v.column_type() != col.dtype())
            {
                return Err(EdaError::TypeMismatch(format!(
                    "column '{}' is {} but holds a {} value '{}'",
                    col.name(),
                    col.dtype(),
                    bad.column_type(),
                    bad
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            columns,
            n_rows,
        })
    }

    /// A dataset with no rows and no columns.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in their original order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look up a column by exact name. The first match wins on duplicate names.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Numeric (integer and float) columns in original order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.dtype().is_numeric())
            .collect()
    }

    /// Text columns in original order.
    pub fn categorical_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.dtype().is_categorical())
            .collect()
    }

    /// Cells of one row in column order, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<Vec<Option<&Value>>> {
        if index >= self.n_rows {
            return None;
        }
        Some(self.columns.iter().map(|c| c.get(index)).collect())
    }

    /// Total null cells across all columns.
    pub fn null_count(&self) -> usize {
        self.columns.iter().map(Column::null_count).sum()
    }

    /// Estimated memory footprint of all cells in bytes, including text contents.
    pub fn memory_bytes(&self) -> usize {
        self.columns.iter().map(Column::memory_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnType;

    fn sample() -> Dataset {
        Dataset::new(
            "sample",
            vec![
                Column::int("a", &[Some(1), Some(2), Some(3)]),
                Column::float("b", &[Some(1.5), None, Some(3.5)]),
                Column::text("c", &[Some("x"), Some("y"), None]),
                Column::boolean("d", &[Some(true), Some(false), Some(true)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let ds = sample();
        assert_eq!(ds.n_rows(), 3);
        assert_eq!(ds.n_cols(), 4);
        assert_eq!(ds.column_names(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = Dataset::new(
            "bad",
            vec![
                Column::int("a", &[Some(1), Some(2)]),
                Column::int("b", &[Some(1)]),
            ],
        );
        assert!(matches!(result, Err(EdaError::ShapeMismatch(_))));
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let col = Column::new("a", ColumnType::Integer, vec![Some(Value::Float(1.0))]);
        let result = Dataset::new("bad", vec![col]);
        assert!(matches!(result, Err(EdaError::TypeMismatch(_))));
    }

    #[test]
    fn test_numeric_and_categorical_selection() {
        let ds = sample();
        let numeric: Vec<&str> = ds.numeric_columns().iter().map(|c| c.name()).collect();
        let categorical: Vec<&str> = ds.categorical_columns().iter().map(|c| c.name()).collect();
        assert_eq!(numeric, vec!["a", "b"]);
        assert_eq!(categorical, vec!["c"]);
    }

    #[test]
    fn test_row_access() {
        let ds = sample();
        let row = ds.row(1).unwrap();
        assert_eq!(row[0], Some(&Value::Int(2)));
        assert_eq!(row[1], None);
        assert!(ds.row(3).is_none());
    }

    #[test]
    fn test_column_lookup() {
        let ds = sample();
        assert!(ds.column("c").is_some());
        assert!(ds.column("missing").is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty("empty");
        assert_eq!(ds.n_rows(), 0);
        assert_eq!(ds.n_cols(), 0);
        assert!(ds.is_empty());
        assert!(ds.row(0).is_none());
    }

    #[test]
    fn test_null_count() {
        assert_eq!(sample().null_count(), 2);
    }
}
