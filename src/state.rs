use std::path::Path;

use anyhow::Context;

use unitroot_lab::data::model::{DataTable, NumericSeries};
use unitroot_lab::stats::{self, TestOutcome, TestSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.  One "Run Tests" trigger
/// turns the current (table, column, selection) into a fresh outcome list;
/// nothing is cached between runs.
pub struct AppState {
    /// Loaded table (None until user opens a file).
    pub table: Option<DataTable>,

    /// Column currently chosen for testing.
    pub selected_column: Option<String>,

    /// Per-test checkboxes, all enabled by default.
    pub selection: TestSelection,

    /// Results of the last run, in reporting order.
    pub outcomes: Vec<TestOutcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            selected_column: None,
            selection: TestSelection::default(),
            outcomes: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table and pick a default test variable.
    pub fn set_table(&mut self, table: DataTable) {
        let numeric = table.numeric_columns();
        self.selected_column = numeric.first().cloned();
        self.outcomes.clear();
        self.status_message = if numeric.is_empty() {
            Some("No numeric columns found in the uploaded file.".to_string())
        } else {
            None
        };
        self.table = Some(table);
        self.loading = false;
    }

    /// Switch the test variable; stale results are dropped.
    pub fn set_column(&mut self, column: String) {
        if self.selected_column.as_deref() != Some(column.as_str()) {
            self.selected_column = Some(column);
            self.outcomes.clear();
        }
    }

    /// The cleaned series for the current selection, missing values dropped.
    pub fn cleaned_series(&self) -> Option<NumericSeries> {
        let table = self.table.as_ref()?;
        let column = self.selected_column.as_ref()?;
        table.series(column)
    }

    /// Execute every enabled test against the current selection.
    pub fn run_tests(&mut self) {
        let Some(series) = self.cleaned_series() else {
            self.status_message = Some("Select a numeric column first.".to_string());
            return;
        };
        if series.is_empty() {
            self.outcomes.clear();
            self.status_message = Some(format!(
                "Column '{}' has no numeric observations after dropping missing values.",
                series.column
            ));
            return;
        }

        log::info!(
            "Running tests on '{}' ({} observations)",
            series.column,
            series.len()
        );
        self.status_message = None;
        self.outcomes = stats::run_selected(self.selection, &series.values);
    }

    /// Write the last run's outcomes as pretty JSON.
    pub fn export_results(&self, path: &Path) -> anyhow::Result<()> {
        let entries: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(report) => serde_json::json!({
                    "test": outcome.kind.short_name(),
                    "report": report,
                    "verdict": report.verdict(),
                }),
                Err(err) => serde_json::json!({
                    "test": outcome.kind.short_name(),
                    "error": err.to_string(),
                }),
            })
            .collect();

        let text = serde_json::to_string_pretty(&entries).context("serializing results")?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported {} results to {}", entries.len(), path.display());
        Ok(())
    }
}
