/// Unit root / stationarity test engines.
///
/// Architecture:
/// ```text
///            NumericSeries values
///                   │
///                   ▼
///   ┌─────────────────────────────┐
///   │  run_selected                │  one attempt per enabled kind,
///   │  ADF → KPSS → PP → RUR       │  failures isolated per test
///   └─────────────────────────────┘
///                   │
///                   ▼
///   ┌─────────────────────────────┐
///   │  TestReport / TestError      │  uniform record per outcome
///   └─────────────────────────────┘
/// ```
///
/// The Dickey-Fuller family (`adf`, `phillips`) shares the `mackinnon`
/// p-value surface and the `ols` regression helper.

pub mod adf;
pub mod kpss;
pub mod mackinnon;
mod ols;
#[cfg(feature = "pp")]
pub mod phillips;
pub mod report;
pub mod rur;

pub use report::{TestReport, Verdict, SIGNIFICANCE};

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// TestKind – the four supported tests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestKind {
    Adf,
    Kpss,
    PhillipsPerron,
    RangeUnitRoot,
}

impl TestKind {
    /// Reporting order of an all-enabled run.
    pub const ALL: [TestKind; 4] = [
        TestKind::Adf,
        TestKind::Kpss,
        TestKind::PhillipsPerron,
        TestKind::RangeUnitRoot,
    ];

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::Adf => "Augmented Dickey-Fuller Test",
            TestKind::Kpss => "KPSS Test",
            TestKind::PhillipsPerron => "Phillips-Perron Test",
            TestKind::RangeUnitRoot => "Range Unit Root Test",
        }
    }

    /// Short name for checkboxes and log lines.
    pub fn short_name(&self) -> &'static str {
        match self {
            TestKind::Adf => "ADF",
            TestKind::Kpss => "KPSS",
            TestKind::PhillipsPerron => "Phillips-Perron",
            TestKind::RangeUnitRoot => "Range Unit Root",
        }
    }

    pub fn null_hypothesis(&self) -> &'static str {
        match self {
            TestKind::Kpss => "The series is stationary",
            _ => "The series has a unit root (non-stationary)",
        }
    }

    pub fn alternative_hypothesis(&self) -> &'static str {
        match self {
            TestKind::Kpss => "The series has a unit root (non-stationary)",
            _ => "The series has no unit root (stationary)",
        }
    }
}

// ---------------------------------------------------------------------------
// TestSelection – which tests a run should perform
// ---------------------------------------------------------------------------

/// Checkbox state, one flag per test kind.  Everything enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSelection {
    pub adf: bool,
    pub kpss: bool,
    pub phillips_perron: bool,
    pub range_unit_root: bool,
}

impl Default for TestSelection {
    fn default() -> Self {
        TestSelection {
            adf: true,
            kpss: true,
            phillips_perron: true,
            range_unit_root: true,
        }
    }
}

impl TestSelection {
    pub fn is_enabled(&self, kind: TestKind) -> bool {
        match kind {
            TestKind::Adf => self.adf,
            TestKind::Kpss => self.kpss,
            TestKind::PhillipsPerron => self.phillips_perron,
            TestKind::RangeUnitRoot => self.range_unit_root,
        }
    }
}

// ---------------------------------------------------------------------------
// TestError – per-test failure taxonomy
// ---------------------------------------------------------------------------

/// Why a single test invocation failed.  A failure never propagates beyond
/// its own outcome entry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TestError {
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("computation failed: {0}")]
    Computation(String),

    #[error("{name} support is not compiled into this build")]
    MissingFeature {
        name: &'static str,
        hint: &'static str,
    },
}

impl TestError {
    /// Actionable follow-up for failures the user can fix themselves.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            TestError::MissingFeature { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// One test invocation and its result.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub kind: TestKind,
    pub result: Result<TestReport, TestError>,
}

/// Run a single test kind with default configuration.
pub fn run(kind: TestKind, values: &[f64]) -> Result<TestReport, TestError> {
    match kind {
        TestKind::Adf => adf::adf_test(values, None),
        TestKind::Kpss => kpss::kpss_test(values, None),
        #[cfg(feature = "pp")]
        TestKind::PhillipsPerron => phillips::pp_test(values),
        #[cfg(not(feature = "pp"))]
        TestKind::PhillipsPerron => Err(TestError::MissingFeature {
            name: "Phillips-Perron",
            hint: "rebuild with the `pp` cargo feature enabled (on by default)",
        }),
        TestKind::RangeUnitRoot => rur::rur_test(values),
    }
}

/// Run every enabled test in the fixed reporting order.  Each kind gets a
/// single attempt; failures are captured in the outcome list and never stop
/// the remaining tests.
pub fn run_selected(selection: TestSelection, values: &[f64]) -> Vec<TestOutcome> {
    TestKind::ALL
        .iter()
        .filter(|kind| selection.is_enabled(**kind))
        .map(|&kind| {
            let result = run(kind, values);
            match &result {
                Ok(report) => log::info!(
                    "{}: statistic {:.4}, p-value {:.4}",
                    kind.short_name(),
                    report.statistic,
                    report.p_value
                ),
                Err(err) => log::error!("{} failed: {err}", kind.short_name()),
            }
            TestOutcome { kind, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_noise(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| ((i * 17 + 13) % 97) as f64 / 50.0 - 1.0)
            .collect()
    }

    #[test]
    fn outcomes_follow_the_fixed_order() {
        let outcomes = run_selected(TestSelection::default(), &pseudo_noise(100));
        let kinds: Vec<TestKind> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, TestKind::ALL);
    }

    #[test]
    fn disabled_tests_leave_no_trace() {
        let selection = TestSelection {
            kpss: false,
            phillips_perron: false,
            ..TestSelection::default()
        };
        let outcomes = run_selected(selection, &pseudo_noise(100));
        let kinds: Vec<TestKind> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![TestKind::Adf, TestKind::RangeUnitRoot]);
    }

    #[cfg(feature = "pp")]
    #[test]
    fn one_failure_does_not_stop_the_others() {
        // Ten observations: enough for ADF/KPSS/PP, not for the range test.
        let outcomes = run_selected(TestSelection::default(), &pseudo_noise(10));
        assert_eq!(outcomes.len(), 4);

        let failed: Vec<TestKind> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.kind)
            .collect();
        assert_eq!(failed, vec![TestKind::RangeUnitRoot]);
    }

    #[cfg(not(feature = "pp"))]
    #[test]
    fn missing_phillips_perron_carries_a_hint() {
        let err = run(TestKind::PhillipsPerron, &pseudo_noise(100)).unwrap_err();
        assert!(matches!(err, TestError::MissingFeature { .. }));
        assert!(err.remediation().unwrap().contains("pp"));
    }

    #[test]
    fn empty_series_fails_every_test() {
        let outcomes = run_selected(TestSelection::default(), &[]);
        assert!(outcomes.iter().all(|o| o.result.is_err()));
    }
}
