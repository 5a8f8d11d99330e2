use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, Sample, SizedSample, Stream, StreamConfig,
};
use rand::rngs::SmallRng;
use std::sync::{Arc, Mutex};

use super::AudioOutput;
use crate::gen::pink_noise::PinkNoise;

/// CPAL-backed output that streams samples pulled from a shared noise
/// generator.
pub struct CpalOutput {
    stream: Option<Stream>,
    device: Option<Device>,
    config: Option<StreamConfig>,
    sample_rate: f32,
    is_active: bool,
}

impl CpalOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            device: None,
            config: None,
            sample_rate: 44100.0,
            is_active: false,
        }
    }

    /// Create a stream that renders `source` at the given linear gain.
    ///
    /// The generator is locked once per callback, not per sample, so other
    /// threads holding the mutex for long stretches will starve the stream.
    pub fn create_stream(
        &mut self,
        source: Arc<Mutex<PinkNoise<SmallRng>>>,
        gain: f32,
    ) -> Result<(), anyhow::Error> {
        let device = self
            .device
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Device not initialized"))?;
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Config not initialized"))?;

        let supported_config = device.default_output_config()?;
        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(device, config, source, gain)?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(device, config, source, gain)?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(device, config, source, gain)?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(device, config, source, gain)?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(device, config, source, gain)?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(device, config, source, gain)?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(device, config, source, gain)?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(device, config, source, gain)?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(device, config, source, gain)?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(device, config, source, gain)?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format '{}'",
                    sample_format
                ))
            }
        };

        self.stream = Some(stream);
        Ok(())
    }

    /// Set up the CPAL host and default output device
    fn setup_host_device(&mut self) -> Result<(), anyhow::Error> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;

        log::info!("Output device: {}", device.name()?);

        let config = device.default_output_config()?;
        log::info!("Default output config: {:?}", config);

        self.sample_rate = config.sample_rate().0 as f32;
        self.device = Some(device);
        self.config = Some(config.into());

        Ok(())
    }

    /// Create a typed stream for the given sample format
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        source: Arc<Mutex<PinkNoise<SmallRng>>>,
        gain: f32,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let num_channels = config.channels as usize;
        let err_fn = |err| log::error!("Error building output sound stream: {}", err);

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                Self::process_frame(output, &source, num_channels, gain);
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }

    /// Fill one callback buffer with generator output
    fn process_frame<SampleType>(
        output: &mut [SampleType],
        source: &Arc<Mutex<PinkNoise<SmallRng>>>,
        num_channels: usize,
        gain: f32,
    ) where
        SampleType: Sample + FromSample<f32>,
    {
        let mut generator = source.lock().unwrap();

        for frame in output.chunks_mut(num_channels) {
            let value: SampleType = SampleType::from_sample(generator.tick() * gain);

            // Same (mono) value on all channels
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }
}

impl Default for CpalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalOutput {
    fn initialize(&mut self) -> Result<(), anyhow::Error> {
        self.setup_host_device()?;
        Ok(())
    }

    fn start(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.play()?;
            self.is_active = true;
            log::info!("Audio stream started at sample rate: {}", self.sample_rate);
        } else {
            return Err(anyhow::anyhow!(
                "Stream not created. Call create_stream first."
            ));
        }

        Ok(())
    }

    fn stop(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
            self.is_active = false;
            log::info!("Audio stream stopped");
        }

        Ok(())
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
