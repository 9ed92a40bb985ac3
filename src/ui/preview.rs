use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use unitroot_lab::data::model::DataTable;

/// How many leading rows the preview shows.
const PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Preview table (central panel, top)
// ---------------------------------------------------------------------------

/// Render the first rows of the loaded table.
pub fn preview_table(ui: &mut Ui, table: &DataTable) {
    let n = table.len().min(PREVIEW_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), table.columns.len())
        .header(20.0, |mut header| {
            for name in &table.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows[..n] {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            }
        });

    if table.len() > n {
        ui.label(format!("… {} more rows not shown", table.len() - n));
    }
}
