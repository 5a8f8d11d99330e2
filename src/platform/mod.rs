//! Platform abstraction for audio output.
//!
//! Provides a unified interface for streaming generated noise to a playback
//! backend. The generator itself is I/O-free; a backend pulls samples from a
//! shared [`PinkNoise`] instance, serializing access through a mutex because
//! every tick mutates the generator's row state.
//!
//! [`PinkNoise`]: crate::gen::pink_noise::PinkNoise

/// Trait for platform-specific audio output implementations
pub trait AudioOutput {
    /// Initialize the audio output, picking a device and sample rate
    fn initialize(&mut self) -> Result<(), anyhow::Error>;

    /// Start the audio stream
    fn start(&mut self) -> Result<(), anyhow::Error>;

    /// Stop the audio stream
    fn stop(&mut self) -> Result<(), anyhow::Error>;

    /// Get the current sample rate
    fn sample_rate(&self) -> f32;

    /// Check if the audio output is active
    fn is_active(&self) -> bool;
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

#[cfg(feature = "native")]
pub use self::cpal_output::CpalOutput;
