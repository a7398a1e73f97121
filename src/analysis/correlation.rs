use serde::Serialize;
use tracing::debug;

use crate::models::Dataset;

/// Pearson correlation matrix over the numeric columns of a dataset.
///
/// Undefined off-diagonal coefficients (fewer than two complete pairs, or a
/// constant side) are `NaN`. The diagonal is always exactly `1.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in dataset order
    pub columns: Vec<String>,
    /// Row-major coefficients, `values[i][j]` pairs `columns[i]` with `columns[j]`
    pub values: Vec<Vec<f64>>,
}

/// One coefficient of the matrix in long form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPair {
    pub left: String,
    pub right: String,
    pub coefficient: f64,
}

impl CorrelationMatrix {
    /// True when the dataset had no numeric columns (zero rows and zero columns).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient between two named columns.
    pub fn get(&self, left: &str, right: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == left)?;
        let j = self.columns.iter().position(|c| c == right)?;
        Some(self.values[i][j])
    }

    /// Upper-triangle pairs (excluding the diagonal) in row-major order.
    pub fn pairs(&self) -> Vec<CorrelationPair> {
        let mut pairs = Vec::new();
        for i in 0..self.size() {
            for j in (i + 1)..self.size() {
                pairs.push(CorrelationPair {
                    left: self.columns[i].clone(),
                    right: self.columns[j].clone(),
                    coefficient: self.values[i][j],
                });
            }
        }
        pairs
    }
}

/// Pearson coefficient over rows where both sides are present.
fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let complete: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    let n = complete.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = complete.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = complete.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &complete {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// Pairwise-complete Pearson correlation over integer and float columns.
///
/// Returns an empty matrix when there are no numeric columns.
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let numeric = dataset.numeric_columns();
    if numeric.is_empty() {
        debug!("no numeric columns, correlation matrix is empty");
        return CorrelationMatrix::default();
    }

    let series: Vec<Vec<Option<f64>>> = numeric.iter().map(|c| c.as_f64s()).collect();
    let k = series.len();
    let mut values = vec![vec![1.0; k]; k];

    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(columns = k, "computed correlation matrix");
    CorrelationMatrix {
        columns: numeric.iter().map(|c| c.name().to_string()).collect(),
        values,
    }
}
