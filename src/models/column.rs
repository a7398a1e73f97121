use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Declared type of a column, fixed when the dataset is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Datetime,
    Text,
}

impl ColumnType {
    /// Integer and floating point columns. Booleans and datetimes are not numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Free-text / categorical columns.
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnType::Text)
    }

    /// Type label reported by the dataset summary.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "int64",
            ColumnType::Float => "float64",
            ColumnType::Boolean => "bool",
            ColumnType::Datetime => "datetime64",
            ColumnType::Text => "object",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single non-null cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Datetime(NaiveDateTime),
    Text(String),
}

impl Value {
    /// The column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int(_) => ColumnType::Integer,
            Value::Float(_) => ColumnType::Float,
            Value::Bool(_) => ColumnType::Boolean,
            Value::Datetime(_) => ColumnType::Datetime,
            Value::Text(_) => ColumnType::Text,
        }
    }

    /// Numeric view of the value, `None` for non-numeric variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Bytes owned on the heap by this value.
    pub fn heap_bytes(&self) -> usize {
        match self {
            Value::Text(s) => s.capacity(),
            _ => 0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Datetime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            Value::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Hashable identity of a cell, used for distinct counts and duplicate detection.
///
/// Floats compare by bit pattern after folding `-0.0` into `0.0`, and all
/// nulls share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey<'a> {
    Null,
    Int(i64),
    Float(u64),
    Bool(bool),
    Datetime(NaiveDateTime),
    Text(&'a str),
}

impl<'a> CellKey<'a> {
    pub fn of(cell: Option<&'a Value>) -> Self {
        match cell {
            None => CellKey::Null,
            Some(Value::Int(v)) => CellKey::Int(*v),
            Some(Value::Float(v)) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                CellKey::Float(v.to_bits())
            }
            Some(Value::Bool(v)) => CellKey::Bool(*v),
            Some(Value::Datetime(v)) => CellKey::Datetime(*v),
            Some(Value::Text(v)) => CellKey::Text(v.as_str()),
        }
    }
}

/// A named, typed column of nullable cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Option<Value>>,
}

impl Column {
    /// Create a column. Value/type agreement is checked by [`Dataset::new`](super::Dataset::new).
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Option<Value>>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Integer column from optional values.
    pub fn int(name: impl Into<String>, values: &[Option<i64>]) -> Self {
        let values = values.iter().map(|v| v.map(Value::Int)).collect();
        Self::new(name, ColumnType::Integer, values)
    }

    /// Float column from optional values. `NaN` is stored as null.
    pub fn float(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let values = values
            .iter()
            .map(|v| v.filter(|x| !x.is_nan()).map(Value::Float))
            .collect();
        Self::new(name, ColumnType::Float, values)
    }

    /// Boolean column from optional values.
    pub fn boolean(name: impl Into<String>, values: &[Option<bool>]) -> Self {
        let values = values.iter().map(|v| v.map(Value::Bool)).collect();
        Self::new(name, ColumnType::Boolean, values)
    }

    /// Text column from optional string slices.
    pub fn text(name: impl Into<String>, values: &[Option<&str>]) -> Self {
        let values = values
            .iter()
            .map(|v| v.map(|s| Value::Text(s.to_string())))
            .collect();
        Self::new(name, ColumnType::Text, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell at `row`, `None` when the cell is null or out of range.
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row).and_then(|v| v.as_ref())
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Number of non-null cells.
    pub fn non_null_count(&self) -> usize {
        self.values.len() - self.null_count()
    }

    /// Number of distinct non-null values.
    pub fn unique_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| v.is_some())
            .map(|v| CellKey::of(v.as_ref()))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of cells equal to zero. Always 0 for non-numeric columns.
    pub fn zero_count(&self) -> usize {
        if !self.dtype.is_numeric() {
            return 0;
        }
        self.values
            .iter()
            .filter(|v| v.as_ref().and_then(Value::as_f64) == Some(0.0))
            .count()
    }

    /// Whether any value appears more than once. Repeated nulls count as duplicates.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.values.len());
        self.values
            .iter()
            .any(|v| !seen.insert(CellKey::of(v.as_ref())))
    }

    /// Numeric view of the column; non-numeric cells read as null.
    pub fn as_f64s(&self) -> Vec<Option<f64>> {
        self.values
            .iter()
            .map(|v| v.as_ref().and_then(Value::as_f64))
            .collect()
    }

    /// Non-null numeric values in row order.
    pub fn non_null_f64s(&self) -> Vec<f64> {
        self.values
            .iter()
            .filter_map(|v| v.as_ref().and_then(Value::as_f64))
            .collect()
    }

    /// Estimated size of the cell storage in bytes, including text contents.
    pub fn memory_bytes(&self) -> usize {
        let fixed = self.values.len() * std::mem::size_of::<Option<Value>>();
        let heap: usize = self.values.iter().flatten().map(Value::heap_bytes).sum();
        fixed + heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_classification() {
        assert!(ColumnType::Integer.is_numeric());
        assert!(ColumnType::Float.is_numeric());
        assert!(!ColumnType::Boolean.is_numeric());
        assert!(!ColumnType::Datetime.is_numeric());
        assert!(!ColumnType::Text.is_numeric());
        assert!(ColumnType::Text.is_categorical());
        assert!(!ColumnType::Boolean.is_categorical());
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(ColumnType::Integer.label(), "int64");
        assert_eq!(ColumnType::Float.to_string(), "float64");
        assert_eq!(ColumnType::Text.label(), "object");
    }

    #[test]
    fn test_null_and_unique_counts() {
        let col = Column::text("c", &[Some("a"), None, Some("b"), Some("a"), None]);
        assert_eq!(col.null_count(), 2);
        assert_eq!(col.non_null_count(), 3);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_float_nan_is_null() {
        let col = Column::float("f", &[Some(1.0), Some(f64::NAN), None]);
        assert_eq!(col.null_count(), 2);
    }

    #[test]
    fn test_zero_count_folds_negative_zero() {
        let col = Column::float("f", &[Some(0.0), Some(-0.0), Some(1.5)]);
        assert_eq!(col.zero_count(), 2);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_zero_count_non_numeric() {
        let col = Column::boolean("b", &[Some(false), Some(false)]);
        assert_eq!(col.zero_count(), 0);
    }

    #[test]
    fn test_has_duplicates() {
        assert!(Column::int("id", &[Some(1), Some(2), Some(2)]).has_duplicates());
        assert!(!Column::int("id", &[Some(1), Some(2), Some(3)]).has_duplicates());
        assert!(Column::int("id", &[Some(1), None, None]).has_duplicates());
    }

    #[test]
    fn test_memory_includes_text_contents() {
        let short = Column::text("t", &[Some("a")]);
        let long = Column::text("t", &[Some("a much longer piece of text")]);
        assert!(long.memory_bytes() > short.memory_bytes());
    }

    #[test]
    fn test_memory_of_empty_column_is_zero() {
        assert_eq!(Column::float("a_long_column_name", &[]).memory_bytes(), 0);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("x".into()).to_string(), "x");
    }
}
