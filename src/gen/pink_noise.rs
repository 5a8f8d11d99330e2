//! Pink noise generator built from octave-spaced hold stages.
//!
//! Sums independent [`HoldNoise`] rows whose hold periods double
//! (1, 2, 4, 8, ..). Each row contributes roughly equal power per octave,
//! so the averaged signal approximates a 1/f power spectrum. This is the
//! classic Voss-McCartney construction of pink noise from white-noise-driven
//! hold stages.

use anyhow::ensure;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::gen::hold::HoldNoise;

/// Most octave rows a generator can hold. The longest hold period,
/// `2^(MAX_BANDS - 1)`, still has to fit an `i32`.
pub const MAX_BANDS: usize = 31;

/// Pink noise generator with an approximately 1/f spectrum.
///
/// Owns its octave rows and the rng that drives them; nothing is shared, so
/// distinct generators produce independent streams and a single generator is
/// advanced strictly through `&mut self`.
pub struct PinkNoise<R: Rng = SmallRng> {
    rows: Vec<HoldNoise>,
    rng: R,
}

impl PinkNoise<SmallRng> {
    /// Build a generator with `bands` octave rows and an entropy-seeded rng.
    pub fn new(bands: usize) -> Result<Self, anyhow::Error> {
        Self::with_rng(bands, SmallRng::from_entropy())
    }

    /// Build a deterministic generator from a seed.
    ///
    /// Two generators built with the same seed and band count produce
    /// identical sample streams.
    pub fn from_seed(bands: usize, seed: u64) -> Result<Self, anyhow::Error> {
        Self::with_rng(bands, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PinkNoise<R> {
    /// Build a generator that draws from a caller-supplied rng.
    ///
    /// Row `i` holds its value for `2^i` ticks. Fails for more than
    /// [`MAX_BANDS`] rows, before consuming anything from `rng`.
    pub fn with_rng(bands: usize, mut rng: R) -> Result<Self, anyhow::Error> {
        ensure!(
            bands <= MAX_BANDS,
            "at most {} octave bands supported, got {}",
            MAX_BANDS,
            bands
        );
        let rows = (0..bands)
            .map(|i| HoldNoise::new(1 << i, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows, rng })
    }

    /// Number of octave rows.
    pub fn bands(&self) -> usize {
        self.rows.len()
    }

    /// Hold period of each row in ticks: 1, 2, 4, ..
    pub fn periods(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.period()).collect()
    }

    /// Generate the next sample, in `[-1, 1]`.
    ///
    /// Advances every row by one tick and returns the mean of their outputs.
    /// A zero-band generator yields silence.
    pub fn tick(&mut self) -> f32 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let mut sum = 0.0;
        for row in &mut self.rows {
            sum += row.tick(&mut self.rng);
        }
        sum / self.rows.len() as f32
    }

    /// Fill `out` with consecutive samples.
    pub fn fill(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.tick();
        }
    }

    /// Restart every row with a fresh draw and a full countdown.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.restart(&mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_many_bands() {
        assert!(PinkNoise::new(MAX_BANDS + 1).is_err());
        assert!(PinkNoise::new(MAX_BANDS).is_ok());
    }

    #[test]
    fn periods_double_per_band() {
        let pink = PinkNoise::from_seed(8, 11).unwrap();
        assert_eq!(pink.bands(), 8);
        assert_eq!(pink.periods(), vec![1, 2, 4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn zero_bands_is_silence() {
        let mut pink = PinkNoise::new(0).unwrap();
        for _ in 0..100 {
            assert_eq!(pink.tick(), 0.0);
        }
    }

    #[test]
    fn output_is_finite_and_bounded() {
        let mut pink = PinkNoise::from_seed(12, 17).unwrap();
        for _ in 0..10_000 {
            let z = pink.tick();
            assert!(z.is_finite());
            assert!(z.abs() <= 1.0, "row average left the unit range: {}", z);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = PinkNoise::from_seed(6, 23).unwrap();
        let mut b = PinkNoise::from_seed(6, 23).unwrap();
        for _ in 0..500 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PinkNoise::from_seed(6, 23).unwrap();
        let mut b = PinkNoise::from_seed(6, 24).unwrap();
        let differs = (0..100).any(|_| a.tick() != b.tick());
        assert!(differs);
    }

    #[test]
    fn fill_matches_tick() {
        let mut a = PinkNoise::from_seed(5, 31).unwrap();
        let mut b = PinkNoise::from_seed(5, 31).unwrap();

        let mut block = [0.0f32; 64];
        a.fill(&mut block);
        for (i, sample) in block.iter().enumerate() {
            assert_eq!(*sample, b.tick(), "sample {} differs", i);
        }
    }
}
