use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, preview, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct UnitRootLabApp {
    pub state: AppState,
}

impl Default for UnitRootLabApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for UnitRootLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: variable and test selection ----
        egui::SidePanel::left("control_panel")
            .default_width(250.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview, plot, results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(table) = &self.state.table else {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a spreadsheet to begin  (File → Open…)");
                });
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading("Preview of uploaded data");
                    preview::preview_table(ui, table);
                    ui.separator();

                    ui.heading("Time series plot");
                    plot::series_plot(ui, &self.state);

                    if !self.state.outcomes.is_empty() {
                        ui.separator();
                        ui.heading("Test results");
                        results::results_section(ui, &self.state.outcomes);
                    }
                });
        });
    }
}
