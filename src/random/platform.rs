// src/random/platform.rs

use super::RandomSource;

/// Non-reproducible source backed by the `rand` crate's thread-local generator.
///
/// Used for demonstration runs where every run should sample a fresh
/// sequence. Tests that check exact numbers use [`super::XorShift28`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformRandom;

impl PlatformRandom {
    /// Creates the source. It carries no state of its own.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for PlatformRandom {
    fn next_f64(&mut self) -> f64 {
        // Standard distribution for f64 samples [0, 1).
        rand::random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_draws_in_unit_interval() {
        let mut rng = PlatformRandom::new();
        for _ in 0..10_000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }
}
