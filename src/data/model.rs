use std::fmt;

use super::error::{DataError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring what a CSV column can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty cell.
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for axis/size mapping.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether the cell is usable in a declared-numeric column.
    pub fn is_numeric_or_null(&self) -> bool {
        matches!(
            self,
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Null
        )
    }
}

// ---------------------------------------------------------------------------
// Table – an immutable, column-ordered dataset
// ---------------------------------------------------------------------------

/// An in-memory table: ordered column names plus rows of cells.
///
/// Invariants, enforced by [`Table::new`]:
/// * column names are unique,
/// * every row has exactly one cell per column.
///
/// Tables are never mutated after construction; the filter and reshape
/// engines produce new tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, validating the shape invariants.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(DataError::DuplicateColumn { name: name.clone() });
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DataError::RowShape {
                    row: i,
                    cells: row.len(),
                    expected: columns.len(),
                });
            }
        }
        Ok(Table { columns, rows })
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in load order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column, as a typed error when absent.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| DataError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Cell at (row, column position).
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<&CellValue>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Distinct values of a column in first-appearance order.
    pub fn distinct_values(&self, name: &str) -> Result<Vec<CellValue>> {
        let idx = self.require_column(name)?;
        let mut seen: Vec<CellValue> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row[idx]) {
                seen.push(row[idx].clone());
            }
        }
        Ok(seen)
    }

    /// Frequency of each value in a column, most frequent first.
    /// Ties keep first-appearance order. Feeds the pie builder.
    pub fn value_counts(&self, name: &str) -> Result<Vec<(String, usize)>> {
        let idx = self.require_column(name)?;
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in &self.rows {
            let label = row[idx].to_string();
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec![
                "Breed".into(),
                "Grooming Needs".into(),
                "Average Weight (g)".into(),
            ],
            vec![
                vec![
                    CellValue::String("Abyssinian".into()),
                    CellValue::String("High".into()),
                    CellValue::Integer(850),
                ],
                vec![
                    CellValue::String("American".into()),
                    CellValue::String("Low".into()),
                    CellValue::Integer(900),
                ],
                vec![
                    CellValue::String("Peruvian".into()),
                    CellValue::String("High".into()),
                    CellValue::Integer(1000),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let result = Table::new(vec!["Breed".into(), "Breed".into()], vec![]);
        assert!(matches!(
            result,
            Err(DataError::DuplicateColumn { name }) if name == "Breed"
        ));
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Integer(1)]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_access() {
        let t = sample_table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.column_index("Grooming Needs"), Some(1));
        assert_eq!(t.column_index("Origin"), None);
        assert!(matches!(
            t.require_column("Origin"),
            Err(DataError::ColumnNotFound { name }) if name == "Origin"
        ));
        assert_eq!(t.cell(0, 0), Some(&CellValue::String("Abyssinian".into())));
        assert_eq!(t.cell(9, 0), None);
    }

    #[test]
    fn test_distinct_values_keeps_appearance_order() {
        let t = sample_table();
        let distinct = t.distinct_values("Grooming Needs").unwrap();
        assert_eq!(
            distinct,
            vec![
                CellValue::String("High".into()),
                CellValue::String("Low".into()),
            ]
        );
    }

    #[test]
    fn test_value_counts_sorted_by_frequency() {
        let t = sample_table();
        let counts = t.value_counts("Grooming Needs").unwrap();
        assert_eq!(
            counts,
            vec![("High".to_string(), 2), ("Low".to_string(), 1)]
        );
    }

    #[test]
    fn test_cell_value_display_and_numeric() {
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Integer(850).to_string(), "850");
        assert_eq!(CellValue::Null.to_string(), "<null>");
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::String("x".into()).as_f64(), None);
        assert!(CellValue::Null.is_numeric_or_null());
        assert!(!CellValue::Bool(true).is_numeric_or_null());
    }
}
