// src/measurement/mod.rs

//! Measurement rules: how a pair of detector settings turns into a pair of
//! outcomes.
//!
//! A rule is injected into the experiment runners as a [`MeasurementRule`]
//! implementation. The crate ships the local hidden variable model
//! ([`ClassicalRule`]) and the quantum-mechanical model ([`QuantumRule`]) for
//! both the electron-spin and the photon-polarization apparatus.
//!
//! Analogy: the rule is the "physics" of the simulation; the runners only
//! choose settings and count.

mod classical;
mod quantum;

pub use classical::{ClassicalRule, ElectronClassicalRule, PhotonClassicalRule};
pub use quantum::{QuantumRule, match_probability};

use crate::core::{BellError, Outcome, Setting};
use crate::random::RandomSource;

/// Produces the outcomes both detectors report for one trial.
pub trait MeasurementRule {
    /// Number of settings available to detector A and detector B.
    fn setting_counts(&self) -> (usize, usize);

    /// Measures one entangled pair.
    ///
    /// Both settings must be below the counts reported by
    /// [`MeasurementRule::setting_counts`]; implementations may panic
    /// otherwise. Use [`MeasurementRule::try_measure`] for unchecked input.
    fn measure(
        &self,
        setting_a: Setting,
        setting_b: Setting,
        rng: &mut dyn RandomSource,
    ) -> (Outcome, Outcome);

    /// Range-checks both settings, then measures.
    fn try_measure(
        &self,
        setting_a: Setting,
        setting_b: Setting,
        rng: &mut dyn RandomSource,
    ) -> Result<(Outcome, Outcome), BellError> {
        let (count_a, count_b) = self.setting_counts();
        let setting_a = Setting::checked(setting_a.index(), count_a)?;
        let setting_b = Setting::checked(setting_b.index(), count_b)?;
        Ok(self.measure(setting_a, setting_b, rng))
    }
}

impl<M: MeasurementRule + ?Sized> MeasurementRule for Box<M> {
    fn setting_counts(&self) -> (usize, usize) {
        (**self).setting_counts()
    }

    fn measure(
        &self,
        setting_a: Setting,
        setting_b: Setting,
        rng: &mut dyn RandomSource,
    ) -> (Outcome, Outcome) {
        (**self).measure(setting_a, setting_b, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShift28;

    #[test]
    fn test_try_measure_rejects_out_of_range_settings() {
        let rule = QuantumRule::photon_polarization();
        let mut rng = XorShift28::new(1);
        assert_eq!(
            rule.try_measure(Setting(2), Setting(0), &mut rng),
            Err(BellError::SettingOutOfRange { setting: 2, bound: 2 })
        );
        assert!(rule.try_measure(Setting(1), Setting(1), &mut rng).is_ok());
    }

    #[test]
    fn test_boxed_rule_delegates() {
        let boxed: Box<dyn MeasurementRule> = Box::new(ElectronClassicalRule::unconstrained());
        assert_eq!(boxed.setting_counts(), (3, 3));
        let mut rng = XorShift28::new(1);
        let (a, b) = boxed.measure(Setting(1), Setting(1), &mut rng);
        assert_eq!(a, b);
    }
}
