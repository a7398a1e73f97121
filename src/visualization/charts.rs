//! Plain-text charts. Output carries no color codes so it can be written to files.

use crate::analysis::CorrelationMatrix;
use crate::models::Dataset;

pub const HISTOGRAM_BINS: usize = 10;
const BAR_WIDTH: usize = 40;
const MAX_MATRIX_LINES: usize = 60;

/// Bin counts over `[min, max]`; the last bin is closed on the right.
fn bin_counts(values: &[f64], bins: usize) -> (f64, f64, Vec<usize>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut counts = vec![0usize; bins];
    let width = (max - min) / bins as f64;

    for &v in values {
        let idx = if width > 0.0 {
            (((v - min) / width) as usize).min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }
    (min, width, counts)
}

/// Text histograms for the first `max_columns` numeric columns.
pub fn format_histograms(dataset: &Dataset, max_columns: usize, bins: usize) -> String {
    let mut output = String::new();
    output.push_str("Histograms\n");
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let numeric: Vec<_> = dataset
        .numeric_columns()
        .into_iter()
        .take(max_columns)
        .collect();
    if numeric.is_empty() {
        output.push_str("  No numeric columns to plot\n");
        return output;
    }
    let bins = bins.max(1);

    for column in numeric {
        output.push_str(&format!("\n{}\n", column.name()));
        let values = column.non_null_f64s();
        if values.is_empty() {
            output.push_str("  No data available.\n");
            continue;
        }

        let (min, width, counts) = bin_counts(&values, bins);
        let max_count = counts.iter().copied().max().unwrap_or(0);

        for (i, count) in counts.iter().enumerate() {
            if width == 0.0 && i > 0 {
                break;
            }
            let lower = min + width * i as f64;
            let upper = lower + width;
            let bar_len = if max_count > 0 {
                ((*count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            output.push_str(&format!(
                "  {:>10.3} - {:<10.3} {:>6}  {}\n",
                lower,
                upper,
                count,
                "\u{2588}".repeat(bar_len)
            ));
        }
    }

    output
}

fn shade(r: f64) -> char {
    if r.is_nan() {
        ' '
    } else {
        match r.abs() {
            a if a >= 0.75 => '\u{2588}',
            a if a >= 0.5 => '\u{2593}',
            a if a >= 0.25 => '\u{2592}',
            _ => '\u{2591}',
        }
    }
}

/// Correlation heatmap: one coefficient and shade glyph per cell.
pub fn format_correlation_heatmap(matrix: &CorrelationMatrix) -> String {
    let mut output = String::new();
    output.push_str("Correlation Heatmap\n");
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if matrix.is_empty() {
        output.push_str("  No numeric columns.\n");
        return output;
    }

    let label_width = matrix.columns.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    output.push_str(&format!("{:label_width$} ", ""));
    for i in 0..matrix.size() {
        output.push_str(&format!("{:>7} ", format!("[{i}]")));
    }
    output.push('\n');

    for (i, (name, row)) in matrix.columns.iter().zip(&matrix.values).enumerate() {
        output.push_str(&format!("{name:label_width$} "));
        for &r in row {
            if r.is_nan() {
                output.push_str(&format!("{:>7} ", "nan"));
            } else {
                output.push_str(&format!("{:>6.2}{} ", r, shade(r)));
            }
        }
        output.push_str(&format!(" [{i}]\n"));
    }

    output.push_str(
        "\n  \u{2591} <0.25  \u{2592} <0.5  \u{2593} <0.75  \u{2588} >=0.75 (absolute value)\n",
    );
    output
}

/// Missingness matrix: one glyph per cell, rows downsampled evenly to fit.
pub fn format_missing_matrix(dataset: &Dataset) -> String {
    let mut output = String::new();
    output.push_str("Missing Values Matrix\n");
    output.push_str(&format!("{}\n", "=".repeat(60)));

    for (i, name) in dataset.column_names().iter().enumerate() {
        output.push_str(&format!("  [{i}] {name}\n"));
    }
    output.push('\n');

    let n = dataset.n_rows();
    let lines = n.min(MAX_MATRIX_LINES);
    for line in 0..lines {
        let row = line * n / lines;
        let cells: String = dataset
            .columns()
            .iter()
            .map(|c| if c.get(row).is_none() { '\u{2588}' } else { '\u{00b7}' })
            .collect();
        output.push_str(&format!("  {row:>8}  {cells}\n"));
    }

    output.push_str("\n  \u{2588} missing  \u{00b7} present\n");
    output
}
