//! Range Unit Root (RUR) test.
//!
//! Counts how often the running maximum or minimum of the series is renewed.
//! Under a unit root the range keeps expanding and the count grows like √n;
//! under stationarity new extremes become rare, so small statistics reject
//! the unit root null.

use super::report::TestReport;
use super::{TestError, TestKind};

const MIN_OBS: usize = 25;

/// Quantile levels of the simulated null distribution, in ascending
/// statistic order.
const PVALS: [f64; 6] = [0.01, 0.025, 0.05, 0.10, 0.90, 0.95];

/// Sample sizes indexing the rows of [`CRIT`].
const SAMPLE_SIZES: [f64; 9] = [
    25.0, 50.0, 100.0, 150.0, 200.0, 250.0, 500.0, 1000.0, 2000.0,
];

/// Null-distribution quantiles of the statistic per sample size, one column
/// per entry of [`PVALS`].
const CRIT: [[f64; 6]; 9] = [
    [0.6626, 0.8126, 0.9192, 1.0712, 2.4863, 2.7312],
    [0.7977, 0.9274, 1.0478, 1.1964, 2.6821, 2.9613],
    [0.9070, 1.0243, 1.1412, 1.2888, 2.8317, 3.1393],
    [0.9543, 1.0768, 1.1869, 1.3294, 2.8915, 3.2049],
    [0.9833, 1.1069, 1.2101, 1.3494, 2.9308, 3.2482],
    [1.0019, 1.1250, 1.2285, 1.3678, 2.9571, 3.2842],
    [1.0488, 1.1738, 1.2735, 1.4112, 3.0207, 3.3584],
    [1.0846, 1.2088, 1.3071, 1.4419, 3.0653, 3.4073],
    [1.1121, 1.2347, 1.3321, 1.4667, 3.0948, 3.4439],
];

/// Run the range unit root test.
pub fn rur_test(series: &[f64]) -> Result<TestReport, TestError> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(TestError::InsufficientData {
            needed: MIN_OBS,
            got: n,
        });
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(TestError::Computation(
            "series contains non-finite values".into(),
        ));
    }

    // Count forward record-breaking observations (new maxima and minima).
    let mut max = series[0];
    let mut min = series[0];
    let mut records = 0usize;
    for &v in &series[1..] {
        if v > max {
            max = v;
            records += 1;
        }
        if v < min {
            min = v;
            records += 1;
        }
    }
    let stat = records as f64 / (n as f64).sqrt();

    let quantiles = quantile_row(n);
    let p_value = interpolate_p(stat, &quantiles);

    // Lower-tail critical values; rejection means the range stopped growing.
    let critical_values = vec![
        ("10%".to_string(), quantiles[3]),
        ("5%".to_string(), quantiles[2]),
        ("2.5%".to_string(), quantiles[1]),
        ("1%".to_string(), quantiles[0]),
    ];

    Ok(TestReport {
        kind: TestKind::RangeUnitRoot,
        statistic: stat,
        p_value,
        lags: None,
        n_obs: Some(n),
        critical_values,
    })
}

/// Null quantiles for a given sample size, linearly interpolated between
/// tabulated rows and clamped at the table edges.
fn quantile_row(n: usize) -> [f64; 6] {
    let n = n as f64;
    if n <= SAMPLE_SIZES[0] {
        return CRIT[0];
    }
    if n >= SAMPLE_SIZES[SAMPLE_SIZES.len() - 1] {
        return CRIT[CRIT.len() - 1];
    }

    let mut hi = 1;
    while SAMPLE_SIZES[hi] < n {
        hi += 1;
    }
    let lo = hi - 1;
    let frac = (n - SAMPLE_SIZES[lo]) / (SAMPLE_SIZES[hi] - SAMPLE_SIZES[lo]);

    let mut row = [0.0; 6];
    for (j, slot) in row.iter_mut().enumerate() {
        *slot = CRIT[lo][j] + frac * (CRIT[hi][j] - CRIT[lo][j]);
    }
    row
}

/// Piecewise-linear p-value through the tabulated quantiles, clamped to the
/// tabulated range.
fn interpolate_p(stat: f64, quantiles: &[f64; 6]) -> f64 {
    if stat <= quantiles[0] {
        return PVALS[0];
    }
    if stat >= quantiles[5] {
        return PVALS[5];
    }
    for j in 0..5 {
        if stat <= quantiles[j + 1] {
            let frac = (stat - quantiles[j]) / (quantiles[j + 1] - quantiles[j]);
            return PVALS[j] + frac * (PVALS[j + 1] - PVALS[j]);
        }
    }
    PVALS[5]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, StandardNormal};

    #[test]
    fn few_records_reject_the_unit_root() {
        // After the first two observations the extremes never move again.
        let mut series = vec![0.0, 1.0, -1.0];
        series.extend((0..97).map(|i| ((i * 31) % 17) as f64 / 20.0 - 0.4));

        let report = rur_test(&series).unwrap();
        assert!(report.statistic < 0.5);
        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn white_noise_rejects_the_unit_root() {
        let mut rng = StdRng::seed_from_u64(5);
        let series: Vec<f64> = (0..500).map(|_| StandardNormal.sample(&mut rng)).collect();

        let report = rur_test(&series).unwrap();
        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn monotone_series_keeps_the_null() {
        let series: Vec<f64> = (0..100).map(|i| i as f64).collect();

        let report = rur_test(&series).unwrap();
        // Every observation is a new maximum.
        assert!((report.statistic - 99.0 / 10.0).abs() < 1e-12);
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn random_walk_keeps_the_null() {
        let mut level = 0.0;
        let series: Vec<f64> = (0..400)
            .map(|i| {
                level += ((i * 17 + 13) % 97) as f64 / 50.0 - 1.0;
                level
            })
            .collect();

        let report = rur_test(&series).unwrap();
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn short_series_is_an_error() {
        let series: Vec<f64> = (0..24).map(|i| i as f64).collect();
        let err = rur_test(&series).unwrap_err();
        assert!(matches!(err, TestError::InsufficientData { needed: 25, .. }));
    }

    #[test]
    fn no_lag_count_is_reported() {
        let series: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();
        let report = rur_test(&series).unwrap();
        assert!(report.lags.is_none());
    }

    #[test]
    fn critical_value_labels_and_order() {
        let series: Vec<f64> = (0..100).map(|i| (i % 11) as f64).collect();
        let report = rur_test(&series).unwrap();

        let labels: Vec<&str> = report
            .critical_values
            .iter()
            .map(|(l, _)| l.as_str())
            .collect();
        assert_eq!(labels, vec!["10%", "5%", "2.5%", "1%"]);

        // Lower-tail quantiles shrink with the significance level.
        let values: Vec<f64> = report.critical_values.iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn statistic_at_a_tabulated_quantile_recovers_its_level() {
        let q = quantile_row(100);
        assert!((interpolate_p(q[2], &q) - 0.05).abs() < 1e-12);
    }
}
