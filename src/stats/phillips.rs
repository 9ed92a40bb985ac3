//! Phillips-Perron test for a unit root.
//!
//! Runs the zero-lag Dickey-Fuller regression and corrects the t-statistic
//! for serial correlation non-parametrically (Z_tau), using a Bartlett-kernel
//! long-run variance instead of lagged difference terms.  Shares the
//! MacKinnon p-value surface and critical values with the ADF engine.

use super::report::TestReport;
use super::{mackinnon, ols, TestError, TestKind};

const MIN_OBS: usize = 8;

/// Run the Phillips-Perron Z_tau test with a constant-only regression.
/// Newey-West truncation defaults to ⌈12·(n/100)^0.25⌉ lags.
pub fn pp_test(series: &[f64]) -> Result<TestReport, TestError> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(TestError::InsufficientData {
            needed: MIN_OBS,
            got: n,
        });
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let m = diff.len();
    let level = &series[..m];

    let fit = ols::fit(&diff, &[level]).ok_or_else(|| {
        TestError::Computation("Dickey-Fuller regression is degenerate".into())
    })?;

    let t_rho = fit.beta[1] / fit.se[1];
    if !t_rho.is_finite() {
        return Err(TestError::Computation(
            "test statistic is not finite".into(),
        ));
    }

    let t_n = fit.nobs as f64;
    let gamma0 = fit.rss / t_n;

    let q = (12.0 * (t_n / 100.0).powf(0.25)).ceil() as usize;
    let q = q.min(m - 1).max(1);

    // Long-run variance of the regression residuals (Bartlett kernel).
    let u = &fit.residuals;
    let mut lam2 = gamma0;
    for j in 1..=q {
        let weight = 1.0 - j as f64 / (q as f64 + 1.0);
        let gamma_j: f64 = u[j..].iter().zip(u.iter()).map(|(&a, &b)| a * b).sum::<f64>() / t_n;
        lam2 += 2.0 * weight * gamma_j;
    }

    if lam2 <= 0.0 || !lam2.is_finite() {
        return Err(TestError::Computation(
            "long-run variance estimate is not positive".into(),
        ));
    }

    // Z_tau: scale the t-statistic and subtract the serial correlation bias.
    let lam = lam2.sqrt();
    let z_tau = (gamma0 / lam2).sqrt() * t_rho
        - (lam2 - gamma0) * t_n * fit.se[1] / (2.0 * lam * fit.sigma());

    // Critical value labels are bare levels; the reporting layer suffixes
    // them with "%".
    let critical_values = mackinnon::critical_values(fit.nobs)
        .iter()
        .zip(["1", "5", "10"])
        .map(|(&value, label)| (label.to_string(), value))
        .collect();

    Ok(TestReport {
        kind: TestKind::PhillipsPerron,
        statistic: z_tau,
        p_value: mackinnon::p_value(z_tau),
        lags: Some(q),
        n_obs: Some(fit.nobs),
        critical_values,
    })
}
