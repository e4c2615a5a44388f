// src/random/xorshift.rs

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Mask applied to the register after every step (28 bits).
const STATE_MASK: i32 = 0x0fff_ffff;
/// `2^28`, the divisor that maps the register into `[0, 1)`.
const STATE_SCALE: f64 = (STATE_MASK as f64) + 1.0;
/// Register value used whenever the state would otherwise be zero.
const FALLBACK_STATE: i32 = 1;

/// Deterministic 28-bit xorshift generator.
///
/// Each draw runs the classic `13 / 17 / 5` xorshift triple on a 32-bit
/// two's-complement register (right shift is arithmetic, left shifts drop
/// bits above 32) and then masks the result to 28 bits. The output is
/// `state / 2^28`, so draws are exact multiples of `2^-28` in `[0, 1)`.
///
/// The sequence is fixed bit for bit by the seed, which is what the
/// reproducible test targets rely on. Zero is a fixed point of the shift
/// steps, so a zero seed or a step that masks to zero falls back to state 1.
/// The orbit of seed 1 (period 234 881 017) never reaches zero.
///
/// Not suitable for anything security related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShift28 {
    state: i32,
}

impl XorShift28 {
    /// Creates a generator from `seed`, keeping only its low 28 bits.
    pub fn new(seed: u32) -> Self {
        let masked = (seed as i32) & STATE_MASK;
        Self { state: if masked == 0 { FALLBACK_STATE } else { masked } }
    }

    /// Current register value.
    pub fn state(&self) -> u32 {
        self.state as u32
    }

    /// Advances the register by one step and returns the new value.
    pub fn next_state(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x &= STATE_MASK;
        self.state = if x == 0 { FALLBACK_STATE } else { x };
        self.state as u32
    }
}

impl Default for XorShift28 {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_SEED)
    }
}

impl RandomSource for XorShift28 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_state()) / STATE_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_from_seed_one() {
        let mut rng = XorShift28::new(1);
        let states: Vec<u32> = (0..6).map(|_| rng.next_state()).collect();
        assert_eq!(states, vec![270369, 67601921, 204722210, 12766233, 24762265, 181903836]);
    }

    #[test]
    fn test_draws_are_scaled_state() {
        let mut rng = XorShift28::new(1);
        assert_eq!(rng.next_f64(), 270369.0 / 268435456.0);
        assert_eq!(rng.next_f64(), 67601921.0 / 268435456.0);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = XorShift28::new(0xdead_beef);
        let mut b = XorShift28::new(0xdead_beef);
        for _ in 0..1000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_seed_is_masked_and_never_zero() {
        assert_eq!(XorShift28::new(0).state(), 1);
        assert_eq!(XorShift28::new(0x1000_0000).state(), 1);
        assert_eq!(XorShift28::new(0xffff_ffff).state(), 0x0fff_ffff);
        assert_eq!(XorShift28::default(), XorShift28::new(1));
    }

    #[test]
    fn test_draws_stay_in_unit_interval() {
        let mut rng = XorShift28::new(0x0fff_ffff);
        for _ in 0..100_000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r), "draw {} outside [0, 1)", r);
        }
    }
}
