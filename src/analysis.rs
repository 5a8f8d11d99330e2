//! Sample correlation estimates for generated signals.
//!
//! Stateless consumers of sample buffers; they are how the demos sanity-check
//! the generator's output without a full spectral analysis.

use anyhow::ensure;

/// Sample autocorrelation of `samples` for lags `0 ..= max_lag`.
///
/// `R(i) = (1/N) * sum_j (x(i+j) - mean) * (x(j) - mean)` with `j` over
/// `0 .. N - i`. The biased `1/N` normalization keeps the estimate stable at
/// large lags; only the first few percent of lags are statistically reliable,
/// so a `max_lag` around `samples.len() / 10` is a sensible ceiling.
pub fn autocorr(samples: &[f32], max_lag: usize) -> Result<Vec<f32>, anyhow::Error> {
    cross_corr(samples, samples, max_lag)
}

/// Sample cross-correlation between `x` and `y` for lags `0 ..= max_lag`.
///
/// `R(i) = (1/N) * sum_j (x(i+j) - mean(x)) * (y(j) - mean(y))`. Both
/// signals are mean-removed. Fails on empty input, mismatched lengths, or
/// `max_lag >= N`.
pub fn cross_corr(x: &[f32], y: &[f32], max_lag: usize) -> Result<Vec<f32>, anyhow::Error> {
    ensure!(!x.is_empty(), "correlation needs at least one sample");
    ensure!(
        x.len() == y.len(),
        "signals must have equal length, got {} and {}",
        x.len(),
        y.len()
    );
    ensure!(
        max_lag < x.len(),
        "max lag {} out of range for {} samples",
        max_lag,
        x.len()
    );

    let n = x.len();
    let x_mean = x.iter().sum::<f32>() / n as f32;
    let y_mean = y.iter().sum::<f32>() / n as f32;

    let mut r = Vec::with_capacity(max_lag + 1);
    for lag in 0..=max_lag {
        let mut acc = 0.0f32;
        for j in 0..n - lag {
            acc += (x[lag + j] - x_mean) * (y[j] - y_mean);
        }
        r.push(acc / n as f32);
    }
    Ok(r)
}
