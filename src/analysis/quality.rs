use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::share;
use crate::config::QualityThresholds;
use crate::models::{CellKey, Dataset};

/// Boolean data-quality heuristics for a dataset.
///
/// Every flag is computed independently on each call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFlags {
    /// Any cell in any column is null
    pub has_missing_values: bool,
    /// At least one row repeats an earlier row exactly
    pub has_duplicates: bool,
    /// Some column's null share is above `missing_threshold`
    pub has_high_missing_columns: bool,
    /// Some column has exactly one distinct non-null value
    pub has_constant_columns: bool,
    /// Some text column's distinct share is above `cardinality_threshold`
    pub has_high_cardinality_categoricals: bool,
    /// Some identifier-looking column repeats a value
    pub has_suspicious_id_duplicates: bool,
    /// Some numeric column's zero share is above `zero_threshold`
    pub has_many_zero_values: bool,
}

impl QualityFlags {
    /// Flag names and values in a fixed order, for display.
    pub fn entries(&self) -> [(&'static str, bool); 7] {
        [
            ("has_missing_values", self.has_missing_values),
            ("has_duplicates", self.has_duplicates),
            ("has_high_missing_columns", self.has_high_missing_columns),
            ("has_constant_columns", self.has_constant_columns),
            (
                "has_high_cardinality_categoricals",
                self.has_high_cardinality_categoricals,
            ),
            (
                "has_suspicious_id_duplicates",
                self.has_suspicious_id_duplicates,
            ),
            ("has_many_zero_values", self.has_many_zero_values),
        ]
    }

    /// Number of raised flags.
    pub fn raised(&self) -> usize {
        self.entries().iter().filter(|(_, v)| *v).count()
    }
}

/// Whether a column name looks like an identifier.
///
/// Matches any name containing "id" case-insensitively (so "width" and
/// "valid" match too), plus the case-sensitive suffixes "_id" and "ID".
pub fn is_id_like(name: &str) -> bool {
    name.to_lowercase().contains("id") || name.ends_with("_id") || name.ends_with("ID")
}

fn has_duplicate_rows(dataset: &Dataset) -> bool {
    let mut seen: HashSet<Vec<CellKey<'_>>> = HashSet::with_capacity(dataset.n_rows());
    (0..dataset.n_rows()).any(|row| {
        let key: Vec<CellKey<'_>> = dataset
            .columns()
            .iter()
            .map(|c| CellKey::of(c.get(row)))
            .collect();
        !seen.insert(key)
    })
}

/// Evaluate all quality flags.
///
/// Ratio comparisons are strict (`>`). A dataset with no rows raises no flags.
///
/// # Examples
///
/// ```
/// use eda_analyzer::{compute_quality_flags, Column, Dataset, QualityThresholds};
///
/// let ds = Dataset::new(
///     "example",
///     vec![
///         Column::int("a", &[Some(1), Some(1), Some(1), Some(1)]),
///         Column::int("b", &[Some(2), Some(3), Some(4), Some(5)]),
///     ],
/// )
/// .unwrap();
/// let flags = compute_quality_flags(&ds, QualityThresholds::default());
/// assert!(flags.has_constant_columns);
/// assert!(!flags.has_missing_values);
/// ```
pub fn compute_quality_flags(dataset: &Dataset, thresholds: QualityThresholds) -> QualityFlags {
    let n = dataset.n_rows();
    if n == 0 {
        warn!(dataset = %dataset.name, "dataset has no rows, all quality flags are false");
        return QualityFlags::default();
    }
    let columns = dataset.columns();

    let flags = QualityFlags {
        has_missing_values: columns.iter().any(|c| c.null_count() > 0),
        has_duplicates: has_duplicate_rows(dataset),
        has_high_missing_columns: columns
            .iter()
            .any(|c| share(c.null_count(), n) > thresholds.missing_threshold),
        has_constant_columns: columns.iter().any(|c| c.unique_count() == 1),
        has_high_cardinality_categoricals: columns
            .iter()
            .filter(|c| c.dtype().is_categorical())
            .any(|c| share(c.unique_count(), n) > thresholds.cardinality_threshold),
        has_suspicious_id_duplicates: columns
            .iter()
            .filter(|c| is_id_like(c.name()))
            .any(|c| c.has_duplicates()),
        has_many_zero_values: columns
            .iter()
            .filter(|c| c.dtype().is_numeric())
            .any(|c| share(c.zero_count(), n) > thresholds.zero_threshold),
    };

    debug!(raised = flags.raised(), "computed quality flags");
    flags
}
