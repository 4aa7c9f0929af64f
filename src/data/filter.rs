use super::error::Result;
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Selection: the sidebar's single-choice filter value
// ---------------------------------------------------------------------------

/// What the selector currently points at.
///
/// The "show everything" sentinel is a real variant rather than a magic
/// string, so a column that happens to contain the text "All" stays
/// filterable.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// No filter applied.
    All,
    /// Keep only rows whose cell equals this value.
    Value(CellValue),
}

impl Selection {
    /// Display form for the selector widget.
    pub fn label(&self) -> String {
        match self {
            Selection::All => "All".to_string(),
            Selection::Value(v) => v.to_string(),
        }
    }
}

/// Choices offered by the selector: `All` first, then the column's
/// distinct values in first-appearance order.
///
/// Computed once per loaded table, not per frame.
pub fn selector_options(table: &Table, column: &str) -> Result<Vec<Selection>> {
    let mut options = vec![Selection::All];
    options.extend(
        table
            .distinct_values(column)?
            .into_iter()
            .map(Selection::Value),
    );
    Ok(options)
}

/// Rows of `table` whose `column` cell equals the selection.
///
/// `Selection::All` returns the table unchanged. Row order and the full
/// column set are preserved either way.
pub fn filter_equals(table: &Table, column: &str, selected: &Selection) -> Result<Table> {
    let wanted = match selected {
        Selection::All => return Ok(table.clone()),
        Selection::Value(v) => v,
    };
    let idx = table.require_column(column)?;
    let rows = table
        .rows()
        .iter()
        .filter(|row| &row[idx] == wanted)
        .cloned()
        .collect();
    Table::new(table.columns().to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::DataError;

    fn breeds() -> Table {
        Table::new(
            vec!["Breed".into(), "Grooming Needs".into()],
            vec![
                vec![
                    CellValue::String("Abyssinian".into()),
                    CellValue::String("High".into()),
                ],
                vec![
                    CellValue::String("American".into()),
                    CellValue::String("Low".into()),
                ],
                vec![
                    CellValue::String("Peruvian".into()),
                    CellValue::String("High".into()),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_all_is_identity() {
        let t = breeds();
        let out = filter_equals(&t, "Grooming Needs", &Selection::All).unwrap();
        assert_eq!(out, t);
    }

    #[test]
    fn test_filter_keeps_matching_rows_in_order() {
        let t = breeds();
        let sel = Selection::Value(CellValue::String("High".into()));
        let out = filter_equals(&t, "Grooming Needs", &sel).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.columns(), t.columns());
        assert_eq!(out.cell(0, 0), Some(&CellValue::String("Abyssinian".into())));
        assert_eq!(out.cell(1, 0), Some(&CellValue::String("Peruvian".into())));
    }

    #[test]
    fn test_filter_absent_value_yields_empty_table() {
        let t = breeds();
        let sel = Selection::Value(CellValue::String("Medium".into()));
        let out = filter_equals(&t, "Grooming Needs", &sel).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.columns(), t.columns());
    }

    #[test]
    fn test_filter_unknown_column_errors() {
        let t = breeds();
        let result = filter_equals(&t, "Origin", &Selection::All);
        // All short-circuits before the column lookup.
        assert!(result.is_ok());
        let sel = Selection::Value(CellValue::String("Peru".into()));
        assert!(matches!(
            filter_equals(&t, "Origin", &sel),
            Err(DataError::ColumnNotFound { name }) if name == "Origin"
        ));
    }

    #[test]
    fn test_selector_options_order() {
        let t = breeds();
        let options = selector_options(&t, "Grooming Needs").unwrap();
        assert_eq!(
            options,
            vec![
                Selection::All,
                Selection::Value(CellValue::String("High".into())),
                Selection::Value(CellValue::String("Low".into())),
            ]
        );
        assert_eq!(options[0].label(), "All");
        assert_eq!(options[1].label(), "High");
    }

    #[test]
    fn test_all_sentinel_does_not_shadow_a_literal_all_value() {
        let t = Table::new(
            vec!["Grooming Needs".into()],
            vec![
                vec![CellValue::String("All".into())],
                vec![CellValue::String("Low".into())],
            ],
        )
        .unwrap();
        let options = selector_options(&t, "Grooming Needs").unwrap();
        // Sentinel plus the two data values, one of which reads "All".
        assert_eq!(options.len(), 3);
        let sel = Selection::Value(CellValue::String("All".into()));
        let out = filter_equals(&t, "Grooming Needs", &sel).unwrap();
        assert_eq!(out.len(), 1);
    }
}
