use std::io::ErrorKind;
use std::path::Path;

use arrow::array::{Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::Dataset;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a two-column dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-separated `x,y` rows, optional header row
/// * `.json`         – `{"x": [...], "y": [...]}` or `[[x, y], ...]`
/// * `.parquet`      – exactly two numeric columns, x first
/// * anything else   – whitespace-separated `x y` rows, `#` comments
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        _ => load_text(path)?,
    };

    debug!("loaded {} points from {}", dataset.len(), path.display());
    Ok(dataset)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::format(path, "file is not valid UTF-8 text"),
        _ => Error::io(path, e),
    })
}

fn finish(path: &Path, points: Vec<(f64, f64)>) -> Result<Dataset> {
    Dataset::from_points(points).ok_or_else(|| Error::format(path, "no data rows found"))
}

// ---------------------------------------------------------------------------
// Whitespace-delimited text loader
// ---------------------------------------------------------------------------

fn load_text(path: &Path) -> Result<Dataset> {
    let text = read_text(path)?;
    let points = parse_text(&text).map_err(|reason| Error::format(path, reason))?;
    finish(path, points)
}

/// Parse `x y` rows.  Everything after `#` is a comment; blank lines are
/// skipped.  Line numbers in errors are 1-based.
fn parse_text(text: &str) -> std::result::Result<Vec<(f64, f64)>, String> {
    let mut points = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            return Err(format!("line {} has {} columns", line_no + 1, tokens.len()));
        }
        let x = parse_number(tokens[0], line_no + 1)?;
        let y = parse_number(tokens[1], line_no + 1)?;
        points.push((x, y));
    }

    Ok(points)
}

fn parse_number(token: &str, line: usize) -> std::result::Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("line {line}: '{token}' is not a number"))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: `x,y` per record.  A first record with no numeric cell is a
/// header and is skipped.  `#` lines are comments.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut points = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(row_no + 1, |p| p.line() as usize);

        if row_no == 0 && is_header(&record) {
            continue;
        }
        if record.len() != 2 {
            return Err(Error::format(
                path,
                format!("line {line} has {} columns", record.len()),
            ));
        }
        let x = parse_number(&record[0], line).map_err(|reason| Error::format(path, reason))?;
        let y = parse_number(&record[1], line).map_err(|reason| Error::format(path, reason))?;
        points.push((x, y));
    }

    finish(path, points)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .all(|cell| cell.parse::<f64>().is_err())
}

fn csv_error(path: &Path, err: csv::Error) -> Error {
    if !err.is_io_error() {
        return Error::format(path, err.to_string());
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::io(path, source),
        other => Error::format(path, format!("{other:?}")),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Accepted JSON shapes:
///
/// ```json
/// { "x": [1.0, 2.0, 3.0], "y": [2.0, 4.0, 6.0] }
/// ```
///
/// ```json
/// [[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]
/// ```
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonData {
    Columns { x: Vec<f64>, y: Vec<f64> },
    Rows(Vec<Vec<f64>>),
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = read_text(path)?;
    let data: JsonData = serde_json::from_str(&text).map_err(|_| {
        Error::format(path, r#"expected {"x": [...], "y": [...]} or [[x, y], ...]"#)
    })?;

    match data {
        JsonData::Columns { x, y } => {
            if x.len() != y.len() {
                return Err(Error::format(
                    path,
                    format!("x has {} values but y has {}", x.len(), y.len()),
                ));
            }
            Dataset::from_columns(x, y).ok_or_else(|| Error::format(path, "no data rows found"))
        }
        JsonData::Rows(rows) => {
            let mut points = Vec::with_capacity(rows.len());
            for (i, row) in rows.iter().enumerate() {
                match row.as_slice() {
                    [x, y] => points.push((*x, *y)),
                    _ => {
                        return Err(Error::format(
                            path,
                            format!("row {i} has {} columns", row.len()),
                        ))
                    }
                }
            }
            finish(path, points)
        }
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with exactly two numeric columns.  The first column
/// is x and the second is y, whatever they are called.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| Error::format(path, format!("not a readable Parquet file ({e})")))?;

    let n_fields = builder.schema().fields().len();
    if n_fields != 2 {
        return Err(Error::format(
            path,
            format!("Parquet schema has {n_fields} columns"),
        ));
    }

    let reader = builder
        .build()
        .map_err(|e| Error::format(path, format!("building Parquet reader ({e})")))?;

    let mut x = Vec::new();
    let mut y = Vec::new();

    for batch_result in reader {
        let batch = batch_result
            .map_err(|e| Error::format(path, format!("reading Parquet record batch ({e})")))?;
        let schema = batch.schema();

        for (idx, out) in [(0, &mut x), (1, &mut y)] {
            let name = schema.field(idx).name();
            let values = numeric_column(batch.column(idx), name)
                .map_err(|reason| Error::format(path, reason))?;
            out.extend(values);
        }
    }

    Dataset::from_columns(x, y).ok_or_else(|| Error::format(path, "no data rows found"))
}

// -- Arrow helpers --

/// Widen a numeric Arrow column to `Vec<f64>`.  Nulls are rejected.
fn numeric_column(col: &ArrayRef, name: &str) -> std::result::Result<Vec<f64>, String> {
    if col.null_count() > 0 {
        return Err(format!("column '{name}' contains null values"));
    }

    let values = match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.values().to_vec()),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.values().iter().map(|&v| v as f64).collect()),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.values().iter().map(|&v| v as f64).collect()),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.values().iter().map(|&v| v as f64).collect()),
        other => return Err(format!("column '{name}' has type {other:?}, expected a number")),
    };

    values.ok_or_else(|| format!("column '{name}' could not be read as {:?}", col.data_type()))
}
