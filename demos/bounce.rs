/* Offline render: writes a few seconds of pink noise to a WAV file.
Run with: cargo run --example bounce --features bounce */

use flicker::PinkNoise;
use log::info;

const SAMPLE_RATE: u32 = 44_100;
const SECONDS: u32 = 5;
const GAIN: f32 = 0.5;

fn main() -> anyhow::Result<()> {
    flicker::utils::init_logger();

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let path = "pink.wav";
    let mut writer = hound::WavWriter::create(path, spec)?;

    let mut pink = PinkNoise::new(16)?;
    let total = SAMPLE_RATE * SECONDS;
    for _ in 0..total {
        let sample = pink.tick() * GAIN;
        writer.write_sample((sample * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;

    info!("Wrote {}s of pink noise to {}", SECONDS, path);
    Ok(())
}
