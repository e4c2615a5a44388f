// src/experiment/config.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{BellError, DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::measurement::{ElectronClassicalRule, MeasurementRule, PhotonClassicalRule, QuantumRule};
use crate::random::{PlatformRandom, RandomSource, XorShift28};

/// Which random source an experiment draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceConfig {
    /// Reproducible [`XorShift28`] stream from the given seed.
    Seeded(u32),
    /// Fresh [`PlatformRandom`] samples on every run.
    Platform,
}

impl SourceConfig {
    /// Builds a new source. Seeded sources restart from their seed each time.
    pub fn build(&self) -> Box<dyn RandomSource> {
        match self {
            SourceConfig::Seeded(seed) => Box::new(XorShift28::new(*seed)),
            SourceConfig::Platform => Box::new(PlatformRandom::new()),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Seeded(DEFAULT_SEED)
    }
}

/// Settings shared by every run of an [`super::Experiment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Trials per run (electron) or per setting pair (photon).
    pub iterations: u64,
    /// Random source for each run.
    pub source: SourceConfig,
}

impl ExperimentConfig {
    /// Config with `iterations` trials and the default seeded source.
    pub fn with_iterations(iterations: u64) -> Self {
        Self { iterations, ..Self::default() }
    }

    /// Replaces the random source.
    pub fn source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Rejects configurations the runners cannot produce statistics for.
    pub fn validate(&self) -> Result<(), BellError> {
        if self.iterations == 0 {
            return Err(BellError::InvalidConfiguration {
                message: "iterations must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, source: SourceConfig::default() }
    }
}

/// Measurement rules available for the electron-spin experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectronRule {
    /// Hidden variables, full set of predetermined outcomes.
    ClassicalV1,
    /// Hidden variables, only sets with differing outcomes.
    ClassicalV2,
    /// Quantum-mechanical correlations.
    Quantum,
}

impl ElectronRule {
    /// Every electron rule, in presentation order.
    pub const ALL: [ElectronRule; 3] = [ElectronRule::ClassicalV1, ElectronRule::ClassicalV2, ElectronRule::Quantum];

    /// Instantiates the rule.
    pub fn build(self) -> Box<dyn MeasurementRule> {
        match self {
            ElectronRule::ClassicalV1 => Box::new(ElectronClassicalRule::unconstrained()),
            ElectronRule::ClassicalV2 => Box::new(ElectronClassicalRule::mixed()),
            ElectronRule::Quantum => Box::new(QuantumRule::electron_spin()),
        }
    }
}

impl fmt::Display for ElectronRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElectronRule::ClassicalV1 => write!(f, "classical rules (version 1 - full set of predetermined outcomes)"),
            ElectronRule::ClassicalV2 => {
                write!(f, "classical rules (version 2 - predetermined outcomes with different outcomes only)")
            }
            ElectronRule::Quantum => write!(f, "quantum rules"),
        }
    }
}

/// Measurement rules available for the photon-polarization experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotonRule {
    /// Hidden variables.
    Classical,
    /// Quantum-mechanical correlations.
    Quantum,
}

impl PhotonRule {
    /// Every photon rule, in presentation order.
    pub const ALL: [PhotonRule; 2] = [PhotonRule::Classical, PhotonRule::Quantum];

    /// Instantiates the rule.
    pub fn build(self) -> Box<dyn MeasurementRule> {
        match self {
            PhotonRule::Classical => Box::new(PhotonClassicalRule::unconstrained()),
            PhotonRule::Quantum => Box::new(QuantumRule::photon_polarization()),
        }
    }
}

impl fmt::Display for PhotonRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotonRule::Classical => write!(f, "classical rules"),
            PhotonRule::Quantum => write!(f, "quantum rules"),
        }
    }
}
