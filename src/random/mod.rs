// src/random/mod.rs

//! Random sources driving the simulations.
//!
//! Everything downstream draws through the [`RandomSource`] trait, so the
//! seeded [`XorShift28`], the non-reproducible [`PlatformRandom`], or a plain
//! closure can be swapped in without touching the measurement rules or the
//! experiment runners. A source is always borrowed mutably for the length of
//! a draw, which keeps one writer per generator.

mod platform;
mod xorshift;

pub use platform::PlatformRandom;
pub use xorshift::XorShift28;

use crate::core::{OUTCOME_COUNT, Outcome, Setting};

/// A stream of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draws the next sample and advances the source.
    fn next_f64(&mut self) -> f64;
}

/// Closures act as sources, which lets tests script exact draw sequences.
impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        (self)()
    }
}

/// Draws an index in `0..bound` as `floor(r * bound)`.
///
/// The result is clamped to `bound - 1` so a source that returns exactly
/// `1.0` cannot produce an out-of-range index. `bound` must be non-zero.
pub fn random_index(bound: usize, rng: &mut dyn RandomSource) -> usize {
    debug_assert!(bound > 0, "random_index requires a non-empty range");
    let index = (rng.next_f64() * bound as f64).floor() as usize;
    index.min(bound - 1)
}

/// Draws one of `setting_count` detector settings uniformly.
pub fn random_setting(setting_count: usize, rng: &mut dyn RandomSource) -> Setting {
    Setting(random_index(setting_count, rng))
}

/// Draws a detector outcome uniformly.
pub fn random_outcome(rng: &mut dyn RandomSource) -> Outcome {
    Outcome::from_index(random_index(OUTCOME_COUNT, rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter();
        move || iter.next().expect("scripted source exhausted")
    }

    #[test]
    fn test_random_index_floors() {
        let mut rng = scripted(vec![0.0, 0.3333, 0.34, 0.999_999]);
        assert_eq!(random_index(3, &mut rng), 0);
        assert_eq!(random_index(3, &mut rng), 0);
        assert_eq!(random_index(3, &mut rng), 1);
        assert_eq!(random_index(3, &mut rng), 2);
    }

    #[test]
    fn test_random_index_clamps_unit_draw() {
        let mut rng = || 1.0;
        assert_eq!(random_index(2, &mut rng), 1);
    }

    #[test]
    fn test_outcome_and_setting_helpers() {
        let mut rng = scripted(vec![0.49, 0.5, 0.7]);
        assert_eq!(random_outcome(&mut rng), Outcome::Up);
        assert_eq!(random_outcome(&mut rng), Outcome::Down);
        assert_eq!(random_setting(3, &mut rng), Setting(2));
    }

    #[test]
    fn test_index_distribution_is_roughly_uniform() {
        let mut rng = XorShift28::new(7);
        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            counts[random_index(3, &mut rng)] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "skewed counts {:?}", counts);
        }
    }
}
