//! Circular counter arithmetic underlying the hold generators.
//!
//! A counter lives in the closed range `[0, max]`. `wrap` folds any integer
//! offset back into that range; `cdelay` steps a countdown that rolls over
//! from 0 back to `max` instead of going negative.

use anyhow::ensure;

/// Fold `q` into the closed range `[0, max]`.
///
/// Returns the unique value in `[0, max]` congruent to `q` modulo `max + 1`,
/// for any `q` of any sign or magnitude. Fails when `max` is negative.
///
/// Example for `max = 3`: inputs `-5, -4, .., 7, 8` map to
/// `3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0`.
pub fn wrap(max: i32, q: i32) -> Result<i32, anyhow::Error> {
    ensure!(max >= 0, "counter range must be non-negative, got max = {}", max);
    Ok(wrap_unchecked(max, q))
}

/// Decrement a countdown over `[0, max]`; the value after 0 is `max`.
///
/// Starting from `q = max`, successive results are `max-1, .., 1, 0, max, ..`
/// with period `max + 1`. A negative `max` fails the same way `wrap` does.
pub fn cdelay(max: i32, q: i32) -> Result<i32, anyhow::Error> {
    ensure!(max >= 0, "counter range must be non-negative, got max = {}", max);
    Ok(cdelay_unchecked(max, q))
}

/// `wrap` without the range check, for counters whose range was validated at
/// construction time. Widened to `i64` so `max + 1` and far-out `q` cannot
/// overflow.
pub(crate) fn wrap_unchecked(max: i32, q: i32) -> i32 {
    debug_assert!(max >= 0);
    i64::from(q).rem_euclid(i64::from(max) + 1) as i32
}

/// `cdelay` without the range check.
pub(crate) fn cdelay_unchecked(max: i32, q: i32) -> i32 {
    debug_assert!(max >= 0);
    (i64::from(q) - 1).rem_euclid(i64::from(max) + 1) as i32
}
