mod analyzer;
mod categories;
mod correlation;
mod missing;
mod profile;
mod quality;
mod sampling;
mod summary;

pub use analyzer::{Analyzer, ColumnCategories, EdaReport};
pub use categories::{top_categories, CategoryCount};
pub use correlation::{correlation_matrix, CorrelationMatrix, CorrelationPair};
pub use missing::{missing_table, problematic_columns, MissingEntry, MissingReport};
pub use profile::{profile_columns, ColumnProfile, NumericStats};
pub use quality::{compute_quality_flags, is_id_like, QualityFlags};
pub use sampling::{head, sample_rows};
pub use summary::{summarize_dataset, ColumnDtype, DatasetSummary};

/// `count / n_rows`, defined as 0 for an empty dataset.
pub(crate) fn share(count: usize, n_rows: usize) -> f64 {
    if n_rows == 0 {
        0.0
    } else {
        count as f64 / n_rows as f64
    }
}

/// `100 * count / n_rows`, defined as 0 for an empty dataset.
pub(crate) fn percent(count: usize, n_rows: usize) -> f64 {
    if n_rows == 0 {
        0.0
    } else {
        100.0 * count as f64 / n_rows as f64
    }
}
