use serde::Serialize;

use super::TestKind;

/// Fixed decision threshold for all verdicts.
pub const SIGNIFICANCE: f64 = 0.05;

// ---------------------------------------------------------------------------
// TestReport – uniform result record across all four engines
// ---------------------------------------------------------------------------

/// Normalized result of one test invocation.  Every engine reshapes its
/// internal quantities into this record so the reporting layer never sees
/// per-routine quirks.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub kind: TestKind,
    /// Test statistic.
    pub statistic: f64,
    /// P-value under the test's null hypothesis.
    pub p_value: f64,
    /// Lag count used, where the routine has one.
    pub lags: Option<usize>,
    /// Effective observation count, where the routine reports one.
    pub n_obs: Option<usize>,
    /// Critical values as (significance label, value), in the order the
    /// routine populates them.  Label formats intentionally differ per test.
    pub critical_values: Vec<(String, f64)>,
}

impl TestReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_p_value(self.kind, self.p_value)
    }
}

// ---------------------------------------------------------------------------
// Verdict – derived stationarity call
// ---------------------------------------------------------------------------

/// The plain-language call derived from a p-value.  Polarity depends on
/// which hypothesis the test places under the null: ADF, Phillips-Perron and
/// the range test reject *towards* stationarity, KPSS rejects *away* from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub stationary: bool,
    pub rejected: bool,
}

impl Verdict {
    pub fn from_p_value(kind: TestKind, p_value: f64) -> Self {
        let rejected = p_value <= SIGNIFICANCE;
        let stationary = match kind {
            TestKind::Kpss => !rejected,
            TestKind::Adf | TestKind::PhillipsPerron | TestKind::RangeUnitRoot => rejected,
        };
        Verdict {
            stationary,
            rejected,
        }
    }

    /// The canned sentence shown under each result table.
    pub fn sentence(&self) -> String {
        format!(
            "The series is {} ({} the null hypothesis).",
            if self.stationary {
                "stationary"
            } else {
                "non-stationary"
            },
            if self.rejected {
                "reject"
            } else {
                "fail to reject"
            }
        )
    }
}
