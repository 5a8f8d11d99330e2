/* Generates a pink noise buffer and logs summary statistics:
long-run mean, variance, and the first autocorrelation lags.
A quick way to eyeball that the octave-summed output behaves. */

use flicker::{autocorr, PinkNoise};
use log::info;

fn main() -> anyhow::Result<()> {
    flicker::utils::init_logger();

    let bands = 16;
    let n = 20_000;

    let mut pink = PinkNoise::new(bands)?;
    let mut samples = vec![0.0f32; n];
    pink.fill(&mut samples);

    let mean = samples.iter().sum::<f32>() / n as f32;
    let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / n as f32;

    info!("{} bands, {} samples", bands, n);
    info!("periods: {:?}", pink.periods());
    info!("mean: {:+.5}  variance: {:.5}", mean, variance);

    // Adjacent lags of pink noise stay strongly correlated; white noise
    // would drop to ~0 after lag 0.
    let r = autocorr(&samples, 10)?;
    for (lag, value) in r.iter().enumerate() {
        info!("lag {:2}: {:+.6}  (r/r0 = {:+.3})", lag, value, value / r[0]);
    }

    Ok(())
}
