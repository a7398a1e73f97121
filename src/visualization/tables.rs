use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::{ColumnCategories, ColumnProfile, DatasetSummary, MissingReport, QualityFlags};
use crate::models::Dataset;

/// How quality flags are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStyle {
    /// A check mark or cross per flag
    Marks,
    /// "WARNING" for raised flags, "OK" otherwise
    Warnings,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn heading(output: &mut String, title: &str, rule: usize) {
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(rule)));
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{v:.3}")
    }
}

/// Format the dataset overview (shape and memory) as a string.
pub fn format_overview(summary: &DatasetSummary) -> String {
    let mut output = String::new();
    heading(&mut output, "Dataset Overview", 50);

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(summary.n_rows)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(summary.n_cols)]);
    table.add_row(vec![
        Cell::new("Memory"),
        Cell::new(format!("{:.2} MB", summary.memory_usage_mb)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print the dataset overview.
pub fn print_overview(summary: &DatasetSummary) {
    print!("{}", format_overview(summary));
}

/// Format the per-column type labels as a string.
pub fn format_dtypes(summary: &DatasetSummary) -> String {
    let mut output = String::new();
    heading(&mut output, "Data Types", 50);

    let mut table = new_table();
    table.set_header(vec!["Column", "Type"]);
    for d in &summary.dtypes {
        table.add_row(vec![Cell::new(&d.column), Cell::new(&d.dtype)]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the per-column type labels.
pub fn print_dtypes(summary: &DatasetSummary) {
    print!("{}", format_dtypes(summary));
}

/// Format the quality flags as a string.
pub fn format_quality_flags(flags: &QualityFlags, style: FlagStyle) -> String {
    let mut output = String::new();
    heading(&mut output, "Quality Flags", 50);

    for (name, raised) in flags.entries() {
        let status = match (style, raised) {
            (FlagStyle::Marks, true) => "\u{2713}".yellow().to_string(),
            (FlagStyle::Marks, false) => "\u{2717}".dimmed().to_string(),
            (FlagStyle::Warnings, true) => "WARNING".yellow().bold().to_string(),
            (FlagStyle::Warnings, false) => "OK".green().to_string(),
        };
        output.push_str(&format!("  {status}  {name}\n"));
    }

    output
}

/// Print the quality flags.
pub fn print_quality_flags(flags: &QualityFlags, style: FlagStyle) {
    print!("{}", format_quality_flags(flags, style));
}

/// Format the missing-value table as a string.
pub fn format_missing_table(report: &MissingReport) -> String {
    let mut output = String::new();
    heading(&mut output, "Missing Values", 50);

    if report.is_empty() {
        output.push_str("  No missing values.\n");
        return output;
    }

    let mut table = new_table();
    table.set_header(vec!["Column", "Missing", "% Missing"]);
    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.column),
            Cell::new(entry.missing_count),
            Cell::new(format!("{:.1}%", entry.missing_percent)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the missing-value table.
pub fn print_missing_table(report: &MissingReport) {
    print!("{}", format_missing_table(report));
}

/// Format the top values of each text column, with their share of all rows.
pub fn format_top_categories(
    categories: &[ColumnCategories],
    top_k: usize,
    n_rows: usize,
) -> String {
    let mut output = String::new();
    heading(&mut output, &format!("Top {top_k} Category Values"), 50);

    for col in categories {
        output.push_str(&format!("\n{}\n", col.column.bold()));
        let mut table = new_table();
        table.set_header(vec!["Value", "Count", "%"]);
        for entry in &col.top {
            let pct = if n_rows == 0 {
                0.0
            } else {
                100.0 * entry.count as f64 / n_rows as f64
            };
            table.add_row(vec![
                Cell::new(entry.value.to_string()),
                Cell::new(entry.count),
                Cell::new(format!("{pct:.1}%")),
            ]);
        }
        output.push_str(&format!("{table}\n"));
    }

    output
}

/// Print the top values of each text column.
pub fn print_top_categories(categories: &[ColumnCategories], top_k: usize, n_rows: usize) {
    print!("{}", format_top_categories(categories, top_k, n_rows));
}

/// Format descriptive column profiles as a string.
pub fn format_profiles(profiles: &[ColumnProfile]) -> String {
    let mut output = String::new();
    heading(&mut output, "Column Profiles", 70);

    let mut table = new_table();
    table.set_header(vec![
        "Column", "Type", "Non-null", "Nulls", "Unique", "Mean", "Std", "Min", "25%", "50%",
        "75%", "Max",
    ]);

    for p in profiles {
        let mut row = vec![
            Cell::new(&p.column),
            Cell::new(&p.dtype),
            Cell::new(p.non_null),
            Cell::new(p.nulls),
            Cell::new(p.unique),
        ];
        match &p.numeric {
            Some(s) => {
                for v in [s.mean, s.std_dev, s.min, s.q25, s.median, s.q75, s.max] {
                    row.push(Cell::new(fmt_stat(v)));
                }
            }
            None => row.extend((0..7).map(|_| Cell::new(""))),
        }
        table.add_row(row);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print descriptive column profiles.
pub fn print_profiles(profiles: &[ColumnProfile]) {
    print!("{}", format_profiles(profiles));
}

/// Format selected rows of a dataset, labelled by row index.
pub fn format_rows(dataset: &Dataset, rows: &[usize], title: &str) -> String {
    let mut output = String::new();
    heading(&mut output, title, 50);

    let mut table = new_table();
    let mut header = vec![String::new()];
    header.extend(dataset.column_names().into_iter().map(str::to_string));
    table.set_header(header);

    for &index in rows {
        let Some(cells) = dataset.row(index) else {
            continue;
        };
        let mut row = vec![Cell::new(index)];
        row.extend(cells.into_iter().map(|cell| match cell {
            Some(v) => Cell::new(v.to_string()),
            None => Cell::new("NaN"),
        }));
        table.add_row(row);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print selected rows of a dataset.
pub fn print_rows(dataset: &Dataset, rows: &[usize], title: &str) {
    print!("{}", format_rows(dataset, rows, title));
}
