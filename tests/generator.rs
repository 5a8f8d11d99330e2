// Integration tests for the octave-summed generator: structure, seeding,
// the single-band equivalence, and long-run statistics.

use flicker::{HoldNoise, PinkNoise, MAX_BANDS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn band_count_is_fixed_and_bounded() {
    let pink = PinkNoise::new(10).unwrap();
    assert_eq!(pink.bands(), 10);
    assert_eq!(pink.periods(), vec![1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);

    assert!(PinkNoise::new(MAX_BANDS).is_ok());
    assert!(PinkNoise::new(MAX_BANDS + 1).is_err());
}

#[test]
fn zero_band_generator_stays_silent() {
    let mut pink = PinkNoise::new(0).unwrap();
    let mut block = [1.0f32; 256];
    pink.fill(&mut block);
    assert!(block.iter().all(|&z| z == 0.0));
}

#[test]
fn single_band_matches_a_lone_hold_stage() {
    // B = 1 degenerates to one hold stage with period 1: every tick returns
    // a fresh uniform draw, unchanged by the averaging.
    let seed = 99;
    let mut reference_rng = SmallRng::seed_from_u64(seed);
    let mut reference = HoldNoise::new(1, &mut reference_rng).unwrap();
    let mut pink = PinkNoise::with_rng(1, SmallRng::seed_from_u64(seed)).unwrap();

    for i in 0..200 {
        assert_eq!(pink.tick(), reference.tick(&mut reference_rng), "tick {}", i);
    }
}

#[test]
fn seeded_generators_replay_and_entropy_generators_differ() {
    let mut a = PinkNoise::from_seed(8, 7).unwrap();
    let mut b = PinkNoise::from_seed(8, 7).unwrap();
    let replayed: Vec<f32> = (0..1000).map(|_| a.tick()).collect();
    assert!(replayed.iter().all(|&z| z == b.tick()));

    let mut c = PinkNoise::new(8).unwrap();
    let mut d = PinkNoise::new(8).unwrap();
    let diverged = (0..100).any(|_| c.tick() != d.tick());
    assert!(diverged, "independently seeded generators produced one stream");
}

#[test]
fn long_run_moments_are_sane() {
    // Rows are uniform on [-1, 1) with variance 1/3; the average of B
    // independent rows has variance 1/(3B). For B = 4 that is ~0.083.
    let bands = 4;
    let n = 100_000;
    let mut pink = PinkNoise::from_seed(bands, 1234).unwrap();
    let samples: Vec<f32> = (0..n).map(|_| pink.tick()).collect();

    let mean = samples.iter().sum::<f32>() / n as f32;
    let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / n as f32;

    assert!(mean.abs() < 0.02, "mean drifted: {}", mean);
    assert!(
        (0.06..0.11).contains(&variance),
        "variance off for {} bands: {}",
        bands,
        variance
    );
    assert!(samples.iter().all(|z| z.abs() <= 1.0));
}

#[test]
fn reset_restarts_the_generator() {
    let mut pink = PinkNoise::from_seed(6, 55).unwrap();
    for _ in 0..1000 {
        pink.tick();
    }
    pink.reset();
    // Still well-formed after reset: bounded output, same structure.
    assert_eq!(pink.periods(), vec![1, 2, 4, 8, 16, 32]);
    for _ in 0..1000 {
        assert!(pink.tick().abs() <= 1.0);
    }
}
