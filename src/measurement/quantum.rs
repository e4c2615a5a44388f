// src/measurement/quantum.rs

use crate::core::{ELECTRON_ANGLES, Outcome, PHOTON_ANGLES_A, PHOTON_ANGLES_B, PI, Setting};
use crate::random::{RandomSource, random_outcome};

use super::MeasurementRule;

/// Probability that detector B reports the same outcome as detector A.
///
/// `p = (1 + cos(angle_factor * Δ)) / 2` with `Δ` the angle difference in
/// radians. Electron spin correlations are 2π-periodic (`angle_factor = 1`);
/// photon polarization correlations are π-periodic (`angle_factor = 2`),
/// i.e. `p = cos²(Δ)` for photons.
pub fn match_probability(angle_diff_deg: f64, angle_factor: f64) -> f64 {
    0.5 * (1.0 + (angle_factor * ((PI * angle_diff_deg) / 180.0)).cos())
}

/// Quantum-mechanical model without hidden variables.
///
/// Detector A's outcome is a fair coin. Detector B then agrees with A with
/// [`match_probability`] for the angle between the two chosen settings, and
/// reports the opposite outcome otherwise. Two draws per trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumRule {
    angles_a: &'static [f64],
    angles_b: &'static [f64],
    angle_factor: f64,
}

impl QuantumRule {
    /// Entangled electron spins, three shared settings at 0°/120°/240°.
    pub fn electron_spin() -> Self {
        Self { angles_a: &ELECTRON_ANGLES, angles_b: &ELECTRON_ANGLES, angle_factor: 1.0 }
    }

    /// Entangled photon polarizations: A at 0°/45°, B at 22.5°/67.5°.
    pub fn photon_polarization() -> Self {
        Self { angles_a: &PHOTON_ANGLES_A, angles_b: &PHOTON_ANGLES_B, angle_factor: 2.0 }
    }

    /// Match probability for a concrete pair of settings.
    pub fn match_probability_for(&self, setting_a: Setting, setting_b: Setting) -> f64 {
        let angle_diff = self.angles_b[setting_b.index()] - self.angles_a[setting_a.index()];
        match_probability(angle_diff, self.angle_factor)
    }
}

impl MeasurementRule for QuantumRule {
    fn setting_counts(&self) -> (usize, usize) {
        (self.angles_a.len(), self.angles_b.len())
    }

    fn measure(
        &self,
        setting_a: Setting,
        setting_b: Setting,
        rng: &mut dyn RandomSource,
    ) -> (Outcome, Outcome) {
        let outcome_a = random_outcome(rng);
        let p_match = self.match_probability_for(setting_a, setting_b);
        // p_match is exactly 1.0 for equal angles, and every draw is < 1.0.
        let outcome_b = if rng.next_f64() < p_match { outcome_a } else { outcome_a.opposite() };
        (outcome_a, outcome_b)
    }
}
