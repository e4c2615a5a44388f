// src/measurement/classical.rs

use crate::core::{ELECTRON_SETTING_COUNT, Outcome, PHOTON_SETTING_COUNT, Setting};
use crate::hidden::{HiddenVariableModel, PredeterminedOutcomes};
use crate::random::RandomSource;

use super::MeasurementRule;

/// Local hidden variable model.
///
/// Each trial draws a fresh [`PredeterminedOutcomes`] set with one slot per
/// setting, and both detectors simply read the slot for the setting they
/// chose. No randomness is consumed at measurement time: the answer for every
/// setting exists before either setting is picked. Both sides index the same
/// set, which is why equal settings always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassicalRule<const N: usize> {
    model: HiddenVariableModel,
}

/// Classical rule for the three-setting electron apparatus.
pub type ElectronClassicalRule = ClassicalRule<ELECTRON_SETTING_COUNT>;

/// Classical rule for the two-setting photon apparatus.
pub type PhotonClassicalRule = ClassicalRule<PHOTON_SETTING_COUNT>;

impl<const N: usize> ClassicalRule<N> {
    /// Creates a rule drawing its assignments with `model`.
    pub fn new(model: HiddenVariableModel) -> Self {
        Self { model }
    }

    /// Full set of assignments, uniform ones included.
    pub fn unconstrained() -> Self {
        Self::new(HiddenVariableModel::Unconstrained)
    }

    /// Only assignments with at least two distinct outcomes.
    pub fn mixed() -> Self {
        Self::new(HiddenVariableModel::Mixed)
    }

    /// The assignment model in use.
    pub fn model(&self) -> HiddenVariableModel {
        self.model
    }

    /// Reads both detectors from an existing assignment.
    pub fn measure_with(
        outcomes: &PredeterminedOutcomes<N>,
        setting_a: Setting,
        setting_b: Setting,
    ) -> (Outcome, Outcome) {
        (outcomes.outcome_for(setting_a), outcomes.outcome_for(setting_b))
    }
}

impl<const N: usize> MeasurementRule for ClassicalRule<N> {
    fn setting_counts(&self) -> (usize, usize) {
        (N, N)
    }

    fn measure(
        &self,
        setting_a: Setting,
        setting_b: Setting,
        rng: &mut dyn RandomSource,
    ) -> (Outcome, Outcome) {
        let outcomes = PredeterminedOutcomes::<N>::generate(self.model, rng);
        Self::measure_with(&outcomes, setting_a, setting_b)
    }
}
