// src/lib.rs

//! `bellsim` - Monte-Carlo simulations of Bell test experiments
//!
//! Two thought experiments are simulated: entangled electron spins measured
//! at three shared angles, and entangled photon polarizations measured in the
//! CHSH arrangement. Each can be run under a local hidden variable model or
//! under quantum-mechanical correlations, and the aggregate statistics show
//! the former respecting Bell's inequality while the latter violates it.

pub mod core;
pub mod random;
pub mod hidden;
pub mod measurement;
pub mod experiment;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BellError, Outcome, Setting};
pub use random::{PlatformRandom, RandomSource, XorShift28};
pub use hidden::{HiddenVariableModel, PredeterminedOutcomes};
pub use measurement::{
    ClassicalRule, ElectronClassicalRule, MeasurementRule, PhotonClassicalRule, QuantumRule,
};
pub use experiment::{
    CoincidenceMatrix, ElectronRule, ElectronTally, Experiment, ExperimentConfig, PhotonReport,
    PhotonRule, SourceConfig, run_electron_experiment, run_photon_experiment,
    run_photon_experiment_detailed,
};
pub use validation::{
    check_chsh,
    check_correlation,
    check_same_setting_agreement,
    validate_photon_report,
    violates_bell_inequality,
};

// Example 1: Electron spins under local hidden variables vs quantum rules
// Equal settings always agree under both models; across different settings
// the hidden variable model matches half the time, quantum mechanics a quarter.
/// ```
/// use bellsim::{
///     run_electron_experiment, ElectronClassicalRule, QuantumRule, XorShift28,
/// };
///
/// let mut rng = XorShift28::new(1);
/// let classical = run_electron_experiment(10_000, &ElectronClassicalRule::unconstrained(), &mut rng);
/// println!("Classical:\n{}", classical);
/// assert_eq!(classical.same_setting_matches, classical.same_setting_trials);
/// assert!((classical.diff_setting_match_ratio() - 0.5).abs() < 0.02);
///
/// let mut rng = XorShift28::new(1);
/// let quantum = run_electron_experiment(10_000, &QuantumRule::electron_spin(), &mut rng);
/// println!("Quantum:\n{}", quantum);
/// assert_eq!(quantum.same_setting_matches, quantum.same_setting_trials);
/// assert!((quantum.diff_setting_match_ratio() - 0.25).abs() < 0.02);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: CHSH statistic for photons
// The hidden variable model stays at the classical bound of 2 while the
// quantum rule approaches the Tsirelson bound 2√2.
/// ```
/// use bellsim::{
///     run_photon_experiment, violates_bell_inequality, PhotonClassicalRule, QuantumRule,
///     XorShift28,
/// };
///
/// let mut rng = XorShift28::new(1);
/// let s_classical = run_photon_experiment(10_000, &PhotonClassicalRule::unconstrained(), &mut rng);
/// assert!(!violates_bell_inequality(s_classical));
///
/// let mut rng = XorShift28::new(1);
/// let s_quantum = run_photon_experiment(10_000, &QuantumRule::photon_polarization(), &mut rng);
/// assert!(violates_bell_inequality(s_quantum));
/// assert!((s_quantum - 2.0 * std::f64::consts::SQRT_2).abs() < 0.05);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
