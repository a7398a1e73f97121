use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::analysis::{CorrelationMatrix, MissingReport};
use crate::error::EdaError;
use crate::models::{Column, ColumnType, Dataset, Value};

/// Cell spellings read as null.
const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
    "#N/A", "#NA", "#N/A N/A", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn is_null_token(field: &str) -> bool {
    NULL_TOKENS.contains(&field)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn all_cells(cells: &[Option<String>], pred: impl Fn(&str) -> bool) -> bool {
    cells.iter().flatten().all(|s| pred(s))
}

/// Options for reading a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator byte
    pub delimiter: u8,
    /// Read date and timestamp text as `Datetime` instead of `Text`
    pub parse_dates: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            parse_dates: false,
        }
    }
}

/// Pick the narrowest type every non-null cell parses as.
///
/// Integer and boolean columns cannot hold nulls, so a null widens them to
/// `Float` and `Text` respectively.
fn infer_type(cells: &[Option<String>], parse_dates: bool) -> ColumnType {
    if cells.iter().all(Option::is_none) {
        // header-only files have no evidence either way
        return if cells.is_empty() {
            ColumnType::Text
        } else {
            ColumnType::Float
        };
    }
    let has_nulls = cells.iter().any(Option::is_none);

    if all_cells(cells, |s| parse_bool(s).is_some()) {
        if has_nulls {
            ColumnType::Text
        } else {
            ColumnType::Boolean
        }
    } else if all_cells(cells, |s| s.parse::<i64>().is_ok()) {
        if has_nulls {
            ColumnType::Float
        } else {
            ColumnType::Integer
        }
    } else if all_cells(cells, |s| s.parse::<f64>().is_ok()) {
        ColumnType::Float
    } else if parse_dates && all_cells(cells, |s| parse_datetime(s).is_some()) {
        ColumnType::Datetime
    } else {
        ColumnType::Text
    }
}

fn convert_cell(raw: String, dtype: ColumnType) -> Option<Value> {
    match dtype {
        ColumnType::Boolean => parse_bool(&raw).map(Value::Bool),
        ColumnType::Integer => raw.parse().ok().map(Value::Int),
        ColumnType::Float => raw
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Value::Float),
        ColumnType::Datetime => parse_datetime(&raw).map(Value::Datetime),
        ColumnType::Text => Some(Value::Text(raw)),
    }
}

fn build_column(name: &str, cells: Vec<Option<String>>, parse_dates: bool) -> Column {
    let dtype = infer_type(&cells, parse_dates);
    debug!(column = name, dtype = dtype.label(), "inferred column type");
    let values = cells
        .into_iter()
        .map(|cell| cell.and_then(|raw| convert_cell(raw, dtype)))
        .collect();
    Column::new(name, dtype, values)
}

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
    name: &str,
    parse_dates: bool,
) -> Result<Dataset, EdaError> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(EdaError::EmptyFile(format!("'{name}' has no header row")));
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push((!is_null_token(field)).then(|| field.to_string()));
        }
    }

    let columns = headers
        .iter()
        .zip(cells)
        .map(|(header, column)| build_column(header, column, parse_dates))
        .collect();

    Dataset::new(name, columns)
}

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All);
    builder
}

/// Read a delimited file with a header row into a typed dataset.
///
/// Rows with a different field count than the header are rejected.
pub fn read_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset, EdaError> {
    let path = path.as_ref();
    let mut rdr = reader_builder(options.delimiter).from_path(path)?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let dataset = parse_csv_records(&mut rdr, &name, options.parse_dates)?;

    info!(
        path = %path.display(),
        rows = dataset.n_rows(),
        columns = dataset.n_cols(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Read delimited data from bytes.
pub fn read_csv_from_bytes(
    data: &[u8],
    name: &str,
    options: &LoadOptions,
) -> Result<Dataset, EdaError> {
    let mut rdr = reader_builder(options.delimiter).from_reader(data);
    parse_csv_records(&mut rdr, name, options.parse_dates)
}

/// Write the missing-value table as `column,missing_count,missing_percent`.
pub fn write_missing_table(
    report: &MissingReport,
    path: impl AsRef<Path>,
) -> Result<(), EdaError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for entry in &report.entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the correlation matrix with column names as both header and row labels.
pub fn write_correlation(
    matrix: &CorrelationMatrix,
    path: impl AsRef<Path>,
) -> Result<(), EdaError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![String::new()];
    header.extend(matrix.columns.iter().cloned());
    wtr.write_record(&header)?;

    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        let mut record = vec![name.clone()];
        record.extend(row.iter().map(|v| {
            if v.is_nan() {
                String::new()
            } else {
                v.to_string()
            }
        }));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
