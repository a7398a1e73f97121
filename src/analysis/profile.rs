use serde::Serialize;
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::models::{Column, Dataset};

/// Location and spread of a numeric column's non-null values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    pub mean: f64,
    /// Sample standard deviation, `NaN` with fewer than two values
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Per-column descriptive statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub column: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
    pub unique: usize,
    /// Present for numeric columns with at least one value
    pub numeric: Option<NumericStats>,
}

fn numeric_stats(column: &Column) -> Option<NumericStats> {
    if !column.dtype().is_numeric() {
        return None;
    }
    let values = column.non_null_f64s();
    if values.is_empty() {
        return None;
    }

    let mean = values.iter().mean();
    let std_dev = values.iter().std_dev();
    let min = Statistics::min(values.iter());
    let max = Statistics::max(values.iter());

    let mut data = Data::new(values);
    Some(NumericStats {
        mean,
        std_dev,
        min,
        q25: data.lower_quartile(),
        median: data.median(),
        q75: data.upper_quartile(),
        max,
    })
}

/// Describe every column of the dataset, in column order.
pub fn profile_columns(dataset: &Dataset) -> Vec<ColumnProfile> {
    dataset
        .columns()
        .iter()
        .map(|c| ColumnProfile {
            column: c.name().to_string(),
            dtype: c.dtype().label().to_string(),
            non_null: c.non_null_count(),
            nulls: c.null_count(),
            unique: c.unique_count(),
            numeric: numeric_stats(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_numeric_profile() {
        let ds = Dataset::new(
            "p",
            vec![Column::float(
                "x",
                &[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(5.0)],
            )],
        )
        .unwrap();
        let profile = profile_columns(&ds);
        let p = &profile[0];
        assert_eq!(p.non_null, 5);
        assert_eq!(p.nulls, 1);
        assert_eq!(p.unique, 5);
        let stats = p.numeric.as_ref().unwrap();
        assert_approx_eq!(stats.mean, 3.0, 1e-9);
        assert_approx_eq!(stats.std_dev, 2.5f64.sqrt(), 1e-9);
        assert_approx_eq!(stats.min, 1.0, 1e-9);
        assert_approx_eq!(stats.median, 3.0, 1e-9);
        assert_approx_eq!(stats.max, 5.0, 1e-9);
        assert!(stats.q25 <= stats.median && stats.median <= stats.q75);
    }

    #[test]
    fn test_text_profile_has_no_numeric_stats() {
        let ds = Dataset::new("p", vec![Column::text("t", &[Some("a"), Some("a"), None])]).unwrap();
        let profile = profile_columns(&ds);
        assert_eq!(profile[0].dtype, "object");
        assert_eq!(profile[0].unique, 1);
        assert!(profile[0].numeric.is_none());
    }

    #[test]
    fn test_all_null_numeric_column() {
        let ds = Dataset::new("p", vec![Column::float("x", &[None, None])]).unwrap();
        assert!(profile_columns(&ds)[0].numeric.is_none());
    }

    #[test]
    fn test_single_value_std_is_nan() {
        let ds = Dataset::new("p", vec![Column::int("x", &[Some(4)])]).unwrap();
        let profile = profile_columns(&ds);
        let stats = profile[0].numeric.as_ref().unwrap();
        assert!(stats.std_dev.is_nan());
        assert_approx_eq!(stats.mean, 4.0, 1e-9);
    }
}
