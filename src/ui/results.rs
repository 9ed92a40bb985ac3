use eframe::egui::{Color32, Grid, RichText, Ui};

use unitroot_lab::stats::{TestKind, TestOutcome, TestReport};

// Severity colours: success (stationary), warning (non-stationary),
// error text uses the shared RED, remediation hints use info blue.
const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
const WARNING: Color32 = Color32::from_rgb(214, 138, 0);
const INFO: Color32 = Color32::LIGHT_BLUE;

// ---------------------------------------------------------------------------
// Results section (central panel, bottom)
// ---------------------------------------------------------------------------

/// Render every outcome of the last run, in the order it was produced.
pub fn results_section(ui: &mut Ui, outcomes: &[TestOutcome]) {
    for outcome in outcomes {
        ui.add_space(8.0);
        ui.strong(outcome.kind.name());
        ui.label(format!(
            "Null hypothesis: {}",
            outcome.kind.null_hypothesis()
        ));
        ui.label(format!(
            "Alternative hypothesis: {}",
            outcome.kind.alternative_hypothesis()
        ));
        ui.add_space(4.0);

        match &outcome.result {
            Ok(report) => report_table(ui, report),
            Err(err) => {
                ui.label(
                    RichText::new(format!("Error in {}: {err}", outcome.kind.name()))
                        .color(Color32::RED),
                );
                if let Some(hint) = err.remediation() {
                    ui.label(RichText::new(format!("Note: {hint}")).color(INFO));
                }
            }
        }
        ui.add_space(8.0);
    }
}

fn report_table(ui: &mut Ui, report: &TestReport) {
    Grid::new(report.kind.short_name())
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Statistic");
            ui.strong("p-value");
            if report.lags.is_some() {
                ui.strong("Lags Used");
            }
            if report.n_obs.is_some() {
                ui.strong("Observations");
            }
            for (label, _) in &report.critical_values {
                ui.strong(critical_header(report.kind, label));
            }
            ui.end_row();

            ui.label(format!("{:.4}", report.statistic));
            ui.label(format!("{:.4}", report.p_value));
            if let Some(lags) = report.lags {
                ui.label(lags.to_string());
            }
            if let Some(n_obs) = report.n_obs {
                ui.label(n_obs.to_string());
            }
            for (_, value) in &report.critical_values {
                ui.label(format!("{value:.4}"));
            }
            ui.end_row();
        });

    let verdict = report.verdict();
    let color = if verdict.stationary { SUCCESS } else { WARNING };
    ui.label(RichText::new(verdict.sentence()).color(color).strong());
}

/// Column header for one critical-value entry.  Phillips-Perron reports bare
/// levels that get a "%" suffix here; the other tests ship labeled levels.
fn critical_header(kind: TestKind, label: &str) -> String {
    match kind {
        TestKind::PhillipsPerron => format!("Critical Value ({label}%)"),
        _ => format!("Critical Value ({label})"),
    }
}
