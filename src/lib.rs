pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::{
    compute_quality_flags, correlation_matrix, missing_table, problematic_columns,
    summarize_dataset, top_categories, Analyzer,
};
pub use config::{EdaConfig, QualityThresholds};
pub use error::EdaError;
pub use io::{CsvFormat, DatasetReader, LoadOptions};
pub use models::{Column, ColumnType, Dataset, Value};
