/* Streams pink noise to the default output device for a few seconds.
Run with: cargo run --example play --features native */

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use flicker::platform::{AudioOutput, CpalOutput};
use flicker::PinkNoise;
use log::info;

fn main() -> anyhow::Result<()> {
    flicker::utils::init_logger();

    let source = Arc::new(Mutex::new(PinkNoise::new(16)?));

    let mut output = CpalOutput::new();
    output.initialize()?;
    output.create_stream(source, 0.25)?;
    output.start()?;

    info!("Playing pink noise for 5 seconds...");
    thread::sleep(Duration::from_secs(5));

    output.stop()?;
    Ok(())
}
