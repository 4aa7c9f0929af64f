use std::path::Path;

use super::error::{DataError, Result};
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Dataset schemas
// ---------------------------------------------------------------------------

/// Shape of one of the dashboard's input files, enforced after load.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSchema {
    /// File name resolved against the data directory.
    pub file_name: &'static str,
    /// Columns that must be present.
    pub required: &'static [&'static str],
    /// Required columns whose cells must be numeric (or empty).
    pub numeric: &'static [&'static str],
    /// Whether every column beyond `required` must also be numeric, with
    /// at least one such column present. Used by the health table, where
    /// the risk columns are open-ended.
    pub extra_columns_numeric: bool,
}

/// Breed attributes: `guinea_pig_breeds.csv`.
pub const BREEDS: DatasetSchema = DatasetSchema {
    file_name: "guinea_pig_breeds.csv",
    required: &[
        "Breed",
        "Average Weight (g)",
        "Coat Type",
        "Grooming Needs",
        "Origin",
    ],
    numeric: &["Average Weight (g)"],
    extra_columns_numeric: false,
};

/// Diet and nutrition facts: `guinea_pig_diet.csv`.
pub const DIET: DatasetSchema = DatasetSchema {
    file_name: "guinea_pig_diet.csv",
    required: &[
        "Food Item",
        "Category",
        "Serving Size (g)",
        "Calcium (mg)",
        "Phosphorus (mg)",
    ],
    numeric: &["Serving Size (g)", "Calcium (mg)", "Phosphorus (mg)"],
    extra_columns_numeric: false,
};

/// Health-risk indices: `guinea_pig_health.csv`. Every column beyond the
/// three named ones is a risk column on the 1–5 scale.
pub const HEALTH: DatasetSchema = DatasetSchema {
    file_name: "guinea_pig_health.csv",
    required: &["Breed", "Avg_Lifespan_Years", "Most_Common_Issue"],
    numeric: &["Avg_Lifespan_Years"],
    extra_columns_numeric: true,
};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`]. One-shot local read, no retry.
///
/// A missing file is reported as [`DataError::FileNotFound`] and never
/// yields a partial table; ragged rows, broken quoting, a missing header
/// row, or a duplicated header name are [`DataError::MalformedFile`].
pub fn load_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DataError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(path, format!("unreadable header row: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(malformed(path, "missing header row".to_string()));
    }

    let mut rows = Vec::new();
    for (row_no, record) in reader.records().enumerate() {
        let record = record.map_err(|e| malformed(path, format!("row {}: {e}", row_no + 1)))?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Table::new(columns, rows).map_err(|e| malformed(path, e.to_string()))
}

/// Load one of the dashboard's datasets from its data directory and
/// validate it against the schema.
pub fn load_dataset(dir: &Path, schema: &DatasetSchema) -> Result<Table> {
    let path = dir.join(schema.file_name);
    let table = load_table(&path)?;
    validate(&path, &table, schema)?;
    Ok(table)
}

fn malformed(path: &Path, message: String) -> DataError {
    DataError::MalformedFile {
        path: path.to_path_buf(),
        message,
    }
}

/// Infer a cell's type from its text.
fn parse_cell(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Schema validation
// ---------------------------------------------------------------------------

fn validate(path: &Path, table: &Table, schema: &DatasetSchema) -> Result<()> {
    for name in schema.required {
        table.require_column(name)?;
    }

    let mut numeric: Vec<&str> = schema.numeric.to_vec();
    if schema.extra_columns_numeric {
        let extras: Vec<&str> = table
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| !schema.required.contains(c))
            .collect();
        if extras.is_empty() {
            return Err(malformed(
                path,
                "expected at least one risk column beyond the required ones".to_string(),
            ));
        }
        numeric.extend(extras);
    }

    for column in numeric {
        let idx = table.require_column(column)?;
        for (row_no, row) in table.rows().iter().enumerate() {
            if !row[idx].is_numeric_or_null() {
                return Err(DataError::NotNumeric {
                    column: column.to_string(),
                    row: row_no + 1,
                    value: row[idx].to_string(),
                });
            }
        }
    }
    Ok(())
}
