use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series plot (central panel, middle)
// ---------------------------------------------------------------------------

/// Render the cleaned series of the selected column as a line plot.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    let Some(series) = state.cleaned_series() else {
        ui.label("Select a numeric column to plot.");
        return;
    };
    if series.is_empty() {
        ui.label("The selected column has no numeric observations.");
        return;
    }

    let points: PlotPoints = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    let line = Line::new(points)
        .name(&series.column)
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    Plot::new("series_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Observation")
        .y_axis_label(series.column.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .height(280.0)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
