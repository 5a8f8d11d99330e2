//! Approximate 1/f ("pink") noise generation from octave-spaced hold stages,
//! plus sample-correlation utilities for inspecting the generated signal.

pub mod analysis;
pub mod gen;
pub mod utils;

// Platform abstraction layer for streaming to an audio device
pub mod platform;

pub use analysis::{autocorr, cross_corr};
pub use gen::{cdelay, wrap, HoldNoise, PinkNoise, MAX_BANDS};
