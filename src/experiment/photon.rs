// src/experiment/photon.rs

use crate::core::Setting;
use crate::measurement::MeasurementRule;
use crate::random::RandomSource;

use super::results::PhotonReport;

/// The four `(setting_a, setting_b)` combinations, in the order they are run.
pub const SETTING_PAIRS: [(Setting, Setting); 4] = [
    (Setting(0), Setting(0)),
    (Setting(0), Setting(1)),
    (Setting(1), Setting(0)),
    (Setting(1), Setting(1)),
];

/// Runs `iterations` trials for each of the four setting pairs and keeps the
/// coincidence matrices.
///
/// Pairs are run one after another in [`SETTING_PAIRS`] order, so a seeded
/// source always feeds the same draws to the same pair.
pub fn run_photon_experiment_detailed<M>(
    iterations: u64,
    rule: &M,
    rng: &mut dyn RandomSource,
) -> PhotonReport
where
    M: MeasurementRule + ?Sized,
{
    log::debug!("photon run: {} trials per setting pair", iterations);

    let mut report = PhotonReport::new();
    for (setting_a, setting_b) in SETTING_PAIRS {
        let matrix = report.matrix_mut(setting_a, setting_b);
        for _ in 0..iterations {
            let (outcome_a, outcome_b) = rule.measure(setting_a, setting_b, rng);
            matrix.record(outcome_a, outcome_b);
        }
    }

    log::debug!("photon run finished: S = {}", report.chsh());
    report
}

/// Runs the photon-polarization experiment and returns the CHSH statistic
/// `S = E(0,0) - E(0,1) + E(1,0) + E(1,1)`.
///
/// Local hidden variable rules stay at or below 2; the quantum rule
/// approaches `2√2`.
pub fn run_photon_experiment<M>(iterations: u64, rule: &M, rng: &mut dyn RandomSource) -> f64
where
    M: MeasurementRule + ?Sized,
{
    run_photon_experiment_detailed(iterations, rule, rng).chsh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::measurement::{PhotonClassicalRule, QuantumRule};
    use crate::random::XorShift28;

    /// Perfectly correlated for (1, 1), anti-correlated otherwise.
    struct Scripted;

    impl MeasurementRule for Scripted {
        fn setting_counts(&self) -> (usize, usize) {
            (2, 2)
        }

        fn measure(&self, a: Setting, b: Setting, _: &mut dyn RandomSource) -> (Outcome, Outcome) {
            if a == Setting(1) && b == Setting(1) {
                (Outcome::Down, Outcome::Down)
            } else {
                (Outcome::Up, Outcome::Down)
            }
        }
    }

    #[test]
    fn test_combination_of_scripted_correlations() {
        let mut rng = XorShift28::new(1);
        let report = run_photon_experiment_detailed(10, &Scripted, &mut rng);
        assert_eq!(report.correlation(Setting(0), Setting(0)), -1.0);
        assert_eq!(report.correlation(Setting(1), Setting(1)), 1.0);
        // -1 - (-1) + (-1) + 1
        assert_eq!(report.chsh(), 0.0);
        assert_eq!(report.matrix(Setting(1), Setting(1)).count(Outcome::Down, Outcome::Down), 10);
    }

    #[test]
    fn test_matrices_sum_to_iterations() {
        let mut rng = XorShift28::new(9);
        let report = run_photon_experiment_detailed(777, &QuantumRule::photon_polarization(), &mut rng);
        for (a, b) in SETTING_PAIRS {
            assert_eq!(report.matrix(a, b).total(), 777);
        }
    }

    #[test]
    fn test_zero_iterations_give_zero_statistic() {
        let mut rng = XorShift28::new(1);
        assert_eq!(run_photon_experiment(0, &PhotonClassicalRule::unconstrained(), &mut rng), 0.0);
    }
}
