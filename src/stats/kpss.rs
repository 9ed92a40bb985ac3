//! KPSS test for level stationarity.
//!
//! The null hypothesis is that the series is stationary around a constant;
//! rejection implies a unit root.  This is the opposite polarity of the
//! Dickey-Fuller family, which the verdict layer accounts for.

use super::report::TestReport;
use super::{TestError, TestKind};

const MIN_OBS: usize = 4;

/// Published critical values for the level-stationary case, with the
/// significance levels they belong to.  Order matches the reported labels.
const TABLE: [(f64, f64); 4] = [(0.10, 0.347), (0.05, 0.463), (0.025, 0.574), (0.01, 0.739)];

/// Run the KPSS test with a constant-only (level) regression.
///
/// `lags` is the Bartlett-kernel truncation for the long-run variance; the
/// default is the Schwert-style rule ⌊4·(n/100)^0.25⌋.
pub fn kpss_test(series: &[f64], lags: Option<usize>) -> Result<TestReport, TestError> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(TestError::InsufficientData {
            needed: MIN_OBS,
            got: n,
        });
    }

    let default_lags = (4.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    let lags = lags.unwrap_or(default_lags).clamp(1, n / 2);

    // Demean (level stationarity) and accumulate partial sums.
    let mean: f64 = series.iter().sum::<f64>() / n as f64;
    let residuals: Vec<f64> = series.iter().map(|&x| x - mean).collect();

    let mut cumsum = vec![0.0; n];
    cumsum[0] = residuals[0];
    for i in 1..n {
        cumsum[i] = cumsum[i - 1] + residuals[i];
    }
    let numerator: f64 = cumsum.iter().map(|&s| s * s).sum::<f64>() / (n * n) as f64;

    // Bartlett-kernel HAC estimate of the long-run variance.
    let mut variance = residuals.iter().map(|&r| r * r).sum::<f64>() / n as f64;
    for j in 1..=lags {
        let weight = 1.0 - j as f64 / (lags + 1) as f64;
        let autocovar: f64 = residuals[j..]
            .iter()
            .zip(residuals.iter())
            .map(|(&a, &b)| a * b)
            .sum::<f64>()
            / n as f64;
        variance += 2.0 * weight * autocovar;
    }

    if variance <= 0.0 || !variance.is_finite() {
        return Err(TestError::Computation(
            "long-run variance estimate is not positive".into(),
        ));
    }

    let stat = numerator / variance;

    let critical_values = TABLE
        .iter()
        .map(|&(level, value)| (format!("{}%", level * 100.0), value))
        .collect();

    Ok(TestReport {
        kind: TestKind::Kpss,
        statistic: stat,
        p_value: p_value(stat),
        lags: Some(lags),
        n_obs: None,
        critical_values,
    })
}

/// Interpolate the p-value inside the published critical-value table,
/// clamped at the table boundaries.
fn p_value(stat: f64) -> f64 {
    if stat <= TABLE[0].1 {
        return TABLE[0].0;
    }
    if stat >= TABLE[3].1 {
        return TABLE[3].0;
    }
    for pair in TABLE.windows(2) {
        let (p_lo, c_lo) = pair[0];
        let (p_hi, c_hi) = pair[1];
        if stat <= c_hi {
            let frac = (stat - c_lo) / (c_hi - c_lo);
            return p_lo + frac * (p_hi - p_lo);
        }
    }
    TABLE[3].0
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
    fn stationary_series_keeps_the_null() {
        let report = kpss_test(&pseudo_noise(200), Some(10)).unwrap();

        assert!(report.statistic > 0.0);
        assert!(report.statistic < 0.463);
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn trending_series_rejects_stationarity() {
        let series: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
        let report = kpss_test(&series, Some(10)).unwrap();

        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn random_walk_rejects_stationarity() {
        let mut level = 0.0;
        let series: Vec<f64> = pseudo_noise(300)
            .into_iter()
            .map(|e| {
                level += e;
                level
            })
            .collect();

        let report = kpss_test(&series, None).unwrap();
        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn short_series_is_an_error() {
        let err = kpss_test(&[1.0, 2.0, 3.0], None).unwrap_err();
        assert!(matches!(err, TestError::InsufficientData { .. }));
    }

    #[test]
    fn critical_value_labels_follow_the_table() {
        let report = kpss_test(&pseudo_noise(100), None).unwrap();

        let labels: Vec<&str> = report
            .critical_values
            .iter()
            .map(|(l, _)| l.as_str())
            .collect();
        assert_eq!(labels, vec!["10%", "5%", "2.5%", "1%"]);

        let values: Vec<f64> = report.critical_values.iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn p_value_interpolates_between_table_rows() {
        // Midway between the 10% and 5% entries.
        let mid = (0.347 + 0.463) / 2.0;
        let p = p_value(mid);
        assert!(p > 0.05 && p < 0.10);

        assert_eq!(p_value(0.1), 0.10);
        assert_eq!(p_value(2.0), 0.01);
    }
}
