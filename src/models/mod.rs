mod column;
mod dataset;

pub use column::{CellKey, Column, ColumnType, Value};
pub use dataset::Dataset;
