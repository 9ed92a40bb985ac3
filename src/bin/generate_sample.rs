//! Writes `sample_series.csv`: a small panel of series with known
//! stationarity properties, for exercising the app end-to-end.
//!
//! Columns:
//! * `white_noise`  – iid standard normal (stationary)
//! * `ar1`          – AR(1) with φ = 0.7 (stationary)
//! * `random_walk`  – cumulative sum of normal increments (unit root)
//! * `trend`        – linear trend plus noise (non-stationary)
//! * `sparse`       – AR(1) with missing cells sprinkled in
//! * `regime`       – text labels, present to exercise column filtering

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

const N: usize = 300;

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let draw = |rng: &mut StdRng| -> f64 { StandardNormal.sample(rng) };

    let white_noise: Vec<f64> = (0..N).map(|_| draw(&mut rng)).collect();

    let mut ar1 = vec![0.0; N];
    for i in 1..N {
        ar1[i] = 0.7 * ar1[i - 1] + draw(&mut rng);
    }

    let mut random_walk = vec![0.0; N];
    for i in 1..N {
        random_walk[i] = random_walk[i - 1] + draw(&mut rng);
    }

    let trend: Vec<f64> = (0..N).map(|i| 0.05 * i as f64 + 0.5 * draw(&mut rng)).collect();

    let output_path = "sample_series.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "t",
        "white_noise",
        "ar1",
        "random_walk",
        "trend",
        "sparse",
        "regime",
    ])?;

    for i in 0..N {
        // Every seventh observation of `sparse` is missing.
        let sparse = if i % 7 == 3 {
            String::new()
        } else {
            format!("{:.6}", ar1[i] * 1.5)
        };
        let regime = if random_walk[i] >= 0.0 { "high" } else { "low" };

        writer.write_record([
            i.to_string(),
            format!("{:.6}", white_noise[i]),
            format!("{:.6}", ar1[i]),
            format!("{:.6}", random_walk[i]),
            format!("{:.6}", trend[i]),
            sparse,
            regime.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {N} observations across 5 numeric series to {output_path}");
    Ok(())
}
