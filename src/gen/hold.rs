//! Hold ("staircase") random generator.
//!
//! Draws a uniform value in `[-1, 1)` and repeats it for a fixed number of
//! ticks before drawing again, producing a piecewise-constant random signal.
//! One of these per octave band is the building block of [`PinkNoise`].
//!
//! [`PinkNoise`]: crate::gen::pink_noise::PinkNoise

use anyhow::ensure;
use rand::Rng;

use crate::gen::counter::cdelay_unchecked;

/// Piecewise-constant random source with a fixed hold period.
pub struct HoldNoise {
    period: i32,
    held: f32,
    counter: i32,
}

impl HoldNoise {
    /// Create a generator that redraws every `period` ticks.
    ///
    /// The first held value is drawn immediately from `rng`; the countdown
    /// starts at its maximum, `period - 1`, so the first redraw lands a full
    /// period after construction. Fails when `period < 1` without touching
    /// the rng.
    pub fn new(period: i32, rng: &mut impl Rng) -> Result<Self, anyhow::Error> {
        ensure!(period >= 1, "hold period must be at least 1, got {}", period);
        Ok(Self {
            period,
            held: rng.gen_range(-1.0..1.0),
            counter: period - 1,
        })
    }

    /// Hold period in ticks.
    pub fn period(&self) -> i32 {
        self.period
    }

    /// Remaining ticks before the next redraw (0 means the redraw already
    /// happened and a full countdown is next).
    pub fn counter(&self) -> i32 {
        self.counter
    }

    /// Value currently being held.
    pub fn held(&self) -> f32 {
        self.held
    }

    /// Produce the next sample.
    ///
    /// Returns the value held *before* the countdown advances; a redraw
    /// triggered by this tick becomes visible on the next one. The countdown
    /// runs over `[0, period - 1]` and a fresh uniform `[-1, 1)` value is
    /// drawn exactly when it reaches 0, once every `period` ticks.
    pub fn tick(&mut self, rng: &mut impl Rng) -> f32 {
        let y = self.held;
        // period >= 1 is guaranteed by new(), so the unchecked countdown is safe.
        self.counter = cdelay_unchecked(self.period - 1, self.counter);
        if self.counter == 0 {
            self.held = rng.gen_range(-1.0..1.0);
        }
        y
    }

    /// Redraw the held value and restart the countdown from its maximum, as
    /// if freshly constructed.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.held = rng.gen_range(-1.0..1.0);
        self.counter = self.period - 1;
    }
}
