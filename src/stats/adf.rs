//! Augmented Dickey-Fuller test for a unit root.
//!
//! Regression: Δy_t = α + β·y_{t−1} + Σ γ_i·Δy_{t−i} + ε_t, constant only.
//! The null hypothesis is β = 0 (unit root); rejection implies stationarity.

use super::report::TestReport;
use super::{mackinnon, ols, TestError, TestKind};

const MIN_OBS: usize = 8;

/// Run the ADF test.
///
/// `max_lags` bounds the augmentation order; the default is the Schwert rule
/// ⌊12·(n/100)^0.25⌋.  The order actually used is chosen by AIC over a
/// common sample, then the final regression is refit on all available
/// observations.
pub fn adf_test(series: &[f64], max_lags: Option<usize>) -> Result<TestReport, TestError> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(TestError::InsufficientData {
            needed: MIN_OBS,
            got: n,
        });
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let m = diff.len();

    let default_max = (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    // Keep enough residual degrees of freedom at the deepest candidate.
    let cap = m.saturating_sub(4) / 3;
    let max_lags = max_lags.unwrap_or(default_max).min(cap);

    let best_lag = select_lag_aic(&diff, series, max_lags)?;

    let fit = df_regression(&diff, series, best_lag, best_lag).ok_or_else(|| {
        TestError::Computation("Dickey-Fuller regression is degenerate".into())
    })?;

    let t_stat = fit.beta[1] / fit.se[1];
    if !t_stat.is_finite() {
        return Err(TestError::Computation(
            "test statistic is not finite".into(),
        ));
    }

    let nobs = fit.nobs;
    let critical_values = mackinnon::LEVELS
        .iter()
        .zip(mackinnon::critical_values(nobs))
        .map(|(label, value)| (label.to_string(), value))
        .collect();

    Ok(TestReport {
        kind: TestKind::Adf,
        statistic: t_stat,
        p_value: mackinnon::p_value(t_stat),
        lags: Some(best_lag),
        n_obs: Some(nobs),
        critical_values,
    })
}

/// Pick the augmentation order by AIC.  All candidates are fit on the sample
/// starting at `max_lags` so their likelihoods are comparable.
fn select_lag_aic(diff: &[f64], level: &[f64], max_lags: usize) -> Result<usize, TestError> {
    let mut best_lag = 0;
    let mut best_aic = f64::INFINITY;

    for lag in 0..=max_lags {
        let Some(fit) = df_regression(diff, level, lag, max_lags) else {
            continue;
        };
        if fit.rss <= 0.0 {
            continue;
        }
        let nobs = fit.nobs as f64;
        let k = lag as f64 + 2.0;
        let aic = nobs * (fit.rss / nobs).ln() + 2.0 * k;
        if aic < best_aic {
            best_aic = aic;
            best_lag = lag;
        }
    }

    if best_aic.is_infinite() {
        return Err(TestError::Computation(
            "no usable Dickey-Fuller regression at any lag order".into(),
        ));
    }
    Ok(best_lag)
}

/// Fit Δy_t on [1, y_{t−1}, Δy_{t−1}, …, Δy_{t−lag}] for t in `start..`.
/// `start >= lag` must hold so every lagged difference exists.
fn df_regression(
    diff: &[f64],
    level: &[f64],
    lag: usize,
    start: usize,
) -> Option<ols::OlsFit> {
    let m = diff.len();
    if start < lag || m <= start + 2 {
        return None;
    }

    let y = &diff[start..];
    let mut cols: Vec<&[f64]> = Vec::with_capacity(lag + 1);
    cols.push(&level[start..m]);
    for i in 1..=lag {
        cols.push(&diff[start - i..m - i]);
    }

    ols::fit(y, &cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, StandardNormal};

    fn pseudo_noise(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| ((i * 17 + 13) % 97) as f64 / 50.0 - 1.0)
            .collect()
    }

    fn pseudo_walk(n: usize) -> Vec<f64> {
        let mut level = 0.0;
        pseudo_noise(n)
            .into_iter()
            .map(|e| {
                level += e;
                level
            })
            .collect()
    }

    #[test]
    fn stationary_series_rejects_unit_root() {
        let series = pseudo_noise(200);
        let report = adf_test(&series, Some(5)).unwrap();

        assert!(report.statistic < 0.0);
        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn white_noise_rejects_unit_root() {
        let mut rng = StdRng::seed_from_u64(7);
        let series: Vec<f64> = (0..300).map(|_| StandardNormal.sample(&mut rng)).collect();

        let report = adf_test(&series, None).unwrap();
        assert!(report.p_value <= 0.05);
    }

    #[test]
    fn random_walk_fails_to_reject() {
        let report = adf_test(&pseudo_walk(400), None).unwrap();
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn trending_series_fails_to_reject() {
        let mut rng = StdRng::seed_from_u64(23);
        let series: Vec<f64> = (0..200)
            .map(|i| {
                let e: f64 = StandardNormal.sample(&mut rng);
                i as f64 * 0.5 + 0.3 * e
            })
            .collect();

        let report = adf_test(&series, None).unwrap();
        assert!(report.p_value > 0.05);
    }

    #[test]
    fn short_series_is_an_error() {
        let err = adf_test(&[1.0, 2.0, 3.0], None).unwrap_err();
        assert!(matches!(err, TestError::InsufficientData { needed: 8, .. }));
    }

    #[test]
    fn lag_selection_respects_bound() {
        let series = pseudo_noise(120);
        let report = adf_test(&series, Some(3)).unwrap();
        assert!(report.lags.unwrap() <= 3);
    }

    #[test]
    fn critical_values_are_labeled_and_ordered() {
        let series = pseudo_noise(100);
        let report = adf_test(&series, None).unwrap();

        let labels: Vec<&str> = report
            .critical_values
            .iter()
            .map(|(l, _)| l.as_str())
            .collect();
        assert_eq!(labels, vec!["1%", "5%", "10%"]);

        let values: Vec<f64> = report.critical_values.iter().map(|(_, v)| *v).collect();
        assert!(values[0] < values[1] && values[1] < values[2]);
    }

    #[test]
    fn minimal_length_runs() {
        let series = pseudo_noise(8);
        let report = adf_test(&series, None).unwrap();
        assert!(report.p_value >= 0.0 && report.p_value <= 1.0);
    }
}
