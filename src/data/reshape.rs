use super::error::{DataError, Result};
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Wide → long reshape
// ---------------------------------------------------------------------------

/// Unpivot every column not named in `id_columns` into (variable, value)
/// pairs.
///
/// Output columns are the id columns in the given order followed by
/// `var_name` and `value_name`. One output row per (input row, non-id
/// column); input row order is outermost, original column order within
/// each input row.
pub fn unpivot(
    table: &Table,
    id_columns: &[&str],
    var_name: &str,
    value_name: &str,
) -> Result<Table> {
    let id_idx: Vec<usize> = id_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<_>>()?;
    let value_idx: Vec<usize> = (0..table.columns().len())
        .filter(|i| !id_idx.contains(i))
        .collect();

    let mut columns: Vec<String> = id_columns.iter().map(|c| c.to_string()).collect();
    for name in [var_name, value_name] {
        if id_columns.contains(&name) {
            return Err(DataError::DuplicateColumn {
                name: name.to_string(),
            });
        }
        columns.push(name.to_string());
    }

    let mut rows = Vec::with_capacity(table.len() * value_idx.len());
    for row in table.rows() {
        for &vi in &value_idx {
            let mut out = Vec::with_capacity(columns.len());
            for &ii in &id_idx {
                out.push(row[ii].clone());
            }
            out.push(CellValue::String(table.columns()[vi].clone()));
            out.push(row[vi].clone());
            rows.push(out);
        }
    }
    Table::new(columns, rows)
}

/// [`unpivot`], then drop every row whose variable cell names
/// `excluded_column`. This is the health tab's wide → tidy step, with the
/// lifespan column kept out of the risk comparison.
pub fn to_tidy(
    table: &Table,
    id_columns: &[&str],
    excluded_column: &str,
    var_name: &str,
    value_name: &str,
) -> Result<Table> {
    let melted = unpivot(table, id_columns, var_name, value_name)?;
    let var_idx = melted.require_column(var_name)?;
    let excluded = CellValue::String(excluded_column.to_string());
    let rows = melted
        .rows()
        .iter()
        .filter(|row| row[var_idx] != excluded)
        .cloned()
        .collect();
    Table::new(melted.columns().to_vec(), rows)
}
