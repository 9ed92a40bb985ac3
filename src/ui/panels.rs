use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use unitroot_lab::data::loader;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.outcomes.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export results…"))
                .clicked()
            {
                export_results_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows × {} columns loaded",
                table.len(),
                table.columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – variable and test selection
// ---------------------------------------------------------------------------

/// Render the control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Unit Root Tests");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No file loaded.");
        return;
    };

    let numeric = table.numeric_columns();
    if numeric.is_empty() {
        ui.label("No numeric columns to test.");
        return;
    }

    // ---- Variable selector ----
    ui.strong("Variable");
    let current = state.selected_column.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("column_select")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &numeric {
                if ui.selectable_label(current == *col, col).clicked() {
                    state.set_column(col.clone());
                }
            }
        });

    if let Some(series) = state.cleaned_series() {
        ui.label(format!(
            "{} observations after dropping missing values",
            series.len()
        ));
    }
    ui.separator();

    // ---- Test checkboxes ----
    ui.strong("Tests to perform");
    ui.checkbox(&mut state.selection.adf, "Augmented Dickey-Fuller (ADF)");
    ui.checkbox(&mut state.selection.kpss, "KPSS");
    ui.checkbox(&mut state.selection.phillips_perron, "Phillips-Perron (PP)");
    ui.checkbox(&mut state.selection.range_unit_root, "Range Unit Root");
    ui.separator();

    // ---- Trigger ----
    let ready = state.selected_column.is_some();
    if ui
        .add_enabled(ready, egui::Button::new("Run Tests"))
        .clicked()
    {
        state.run_tests();
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open time series data")
        .add_filter("Supported files", &["xlsx", "xls", "csv", "json"])
        .add_filter("Excel", &["xlsx", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.len(),
                    table.columns
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}

fn export_results_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export test results")
        .set_file_name("unit_root_results.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_results(&path) {
            log::error!("Failed to export results: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
