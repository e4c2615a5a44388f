// src/experiment/mod.rs

//! Experiment runners for the electron-spin and photon-polarization Bell tests.
//!
//! The free functions [`run_electron_experiment`] and
//! [`run_photon_experiment`] take any [`crate::measurement::MeasurementRule`]
//! and any [`crate::random::RandomSource`]. [`Experiment`] wraps them for
//! callers that prefer picking rules and sources from a validated
//! [`ExperimentConfig`].

mod config;
mod electron;
mod photon;
mod results;

pub use config::{ElectronRule, ExperimentConfig, PhotonRule, SourceConfig};
pub use electron::run_electron_experiment;
pub use photon::{SETTING_PAIRS, run_photon_experiment, run_photon_experiment_detailed};
pub use results::{CoincidenceMatrix, ElectronTally, PhotonReport, format_percentage};

use crate::core::BellError;

/// Runs experiments described by an [`ExperimentConfig`].
///
/// Every run builds a fresh random source from the config, so seeded runs are
/// reproducible and independent of each other.
#[derive(Debug, Clone, Default)]
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    /// Validates `config` and wraps it.
    pub fn new(config: ExperimentConfig) -> Result<Self, BellError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this experiment runs with.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs the electron-spin experiment with `rule`.
    pub fn run_electron(&self, rule: ElectronRule) -> ElectronTally {
        log::debug!("running electron experiment by {}", rule);
        let mut rng = self.config.source.build();
        run_electron_experiment(self.config.iterations, &*rule.build(), &mut *rng)
    }

    /// Runs the photon-polarization experiment with `rule`.
    pub fn run_photon(&self, rule: PhotonRule) -> PhotonReport {
        log::debug!("running photon experiment by {}", rule);
        let mut rng = self.config.source.build();
        run_photon_experiment_detailed(self.config.iterations, &*rule.build(), &mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(Experiment::new(ExperimentConfig::with_iterations(0)).is_err());
    }

    #[test]
    fn test_runs_are_independent() -> Result<(), BellError> {
        let experiment = Experiment::new(ExperimentConfig::with_iterations(500))?;
        let first = experiment.run_electron(ElectronRule::ClassicalV2);
        experiment.run_photon(PhotonRule::Quantum);
        let second = experiment.run_electron(ElectronRule::ClassicalV2);
        assert_eq!(first, second);
        Ok(())
    }
}
