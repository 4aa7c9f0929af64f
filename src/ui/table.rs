use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Data table widget
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 18.0;

/// Render a [`Table`] as a striped grid. Null cells show as empty.
pub fn data_table(ui: &mut Ui, id: &str, table: &Table) {
    let n_cols = table.columns().len();
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), n_cols)
            .header(HEADER_HEIGHT, |mut header| {
                for name in table.columns() {
                    header.col(|ui| {
                        ui.strong(name.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let r = row.index();
                    for c in 0..n_cols {
                        row.col(|ui| {
                            match table.cell(r, c) {
                                Some(CellValue::Null) | None => {}
                                Some(cell) => {
                                    ui.label(cell.to_string());
                                }
                            };
                        });
                    }
                });
            });
    });
}
