//! MacKinnon approximations for Dickey-Fuller style statistics.
//!
//! Shared by the ADF and Phillips-Perron engines: both statistics follow the
//! same asymptotic distribution under the unit root null, so they use one
//! p-value surface (MacKinnon 1994) and one finite-sample critical value
//! table (MacKinnon 2010), both for the constant-only regression.

use statrs::function::erf;

/// Response surface coefficients for p <= Φ-range around `TAU_STAR`.
const SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];
const TAU_STAR: f64 = -1.61;
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;

/// Standard normal CDF.
fn norm_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf::erf(z / std::f64::consts::SQRT_2))
}

fn polyval(coeffs: &[f64], x: f64) -> f64 {
    let mut acc = 0.0;
    for &c in coeffs.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

/// Approximate asymptotic p-value for a constant-only Dickey-Fuller
/// t-statistic.
pub fn p_value(t_stat: f64) -> f64 {
    if t_stat.is_nan() {
        return f64::NAN;
    }
    if t_stat > TAU_MAX {
        return 1.0;
    }
    if t_stat < TAU_MIN {
        return 0.0;
    }
    let z = if t_stat <= TAU_STAR {
        polyval(&SMALL_P, t_stat)
    } else {
        polyval(&LARGE_P, t_stat)
    };
    norm_cdf(z)
}

/// Finite-sample critical values at 1% / 5% / 10% for `nobs` effective
/// observations, constant-only regression.
pub fn critical_values(nobs: usize) -> [f64; 3] {
    let n = nobs as f64;
    [
        -3.43035 - 6.5393 / n - 16.786 / (n * n) - 79.433 / (n * n * n),
        -2.86154 - 2.8903 / n - 4.234 / (n * n) - 40.04 / (n * n * n),
        -2.56677 - 1.5384 / n - 2.809 / (n * n),
    ]
}

/// Labels matching [`critical_values`], in the same order.
pub const LEVELS: [&str; 3] = ["1%", "5%", "10%"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_value_matches_critical_points() {
        // At the asymptotic critical values the surface should return the
        // corresponding significance level.
        assert!((p_value(-3.43) - 0.01).abs() < 0.005);
        assert!((p_value(-2.86) - 0.05).abs() < 0.01);
        assert!((p_value(-2.57) - 0.10).abs() < 0.02);
    }

    #[test]
    fn p_value_is_monotone() {
        let mut prev = 0.0;
        let mut t = -10.0;
        while t < 2.0 {
            let p = p_value(t);
            assert!(p >= prev - 1e-12, "p-value decreased at t={t}");
            prev = p;
            t += 0.05;
        }
    }

    #[test]
    fn p_value_tails() {
        assert_eq!(p_value(-25.0), 0.0);
        assert_eq!(p_value(5.0), 1.0);
        assert!(p_value(0.0) > 0.9);
    }

    #[test]
    fn critical_values_approach_asymptotics() {
        let [one, five, ten] = critical_values(100_000);
        assert!((one - -3.43035).abs() < 0.001);
        assert!((five - -2.86154).abs() < 0.001);
        assert!((ten - -2.56677).abs() < 0.001);
    }

    #[test]
    fn critical_values_are_ordered() {
        let [one, five, ten] = critical_values(100);
        assert!(one < five && five < ten);
    }

    #[test]
    fn small_samples_get_harsher_critical_values() {
        let small = critical_values(25);
        let large = critical_values(500);
        for i in 0..3 {
            assert!(small[i] < large[i]);
        }
    }
}
