// src/experiment/electron.rs

use crate::measurement::MeasurementRule;
use crate::random::{RandomSource, random_setting};

use super::results::ElectronTally;

/// Runs the electron-spin experiment for `iterations` trials.
///
/// Every trial draws detector A's setting, then detector B's, independently
/// and uniformly from the rule's settings, asks `rule` for both outcomes and
/// counts the trial as same-setting or different-setting. The returned
/// counters are raw; see [`ElectronTally`] for ratios.
///
/// The run is a pure function of its inputs: the same rule and an identically
/// seeded source give an identical tally.
pub fn run_electron_experiment<M>(
    iterations: u64,
    rule: &M,
    rng: &mut dyn RandomSource,
) -> ElectronTally
where
    M: MeasurementRule + ?Sized,
{
    let (count_a, count_b) = rule.setting_counts();
    log::debug!("electron run: {} trials over {}x{} settings", iterations, count_a, count_b);

    let mut tally = ElectronTally::default();
    for _ in 0..iterations {
        let setting_a = random_setting(count_a, rng);
        let setting_b = random_setting(count_b, rng);
        let (outcome_a, outcome_b) = rule.measure(setting_a, setting_b, rng);
        tally.record(setting_a == setting_b, outcome_a == outcome_b);
    }

    log::debug!(
        "electron run finished: {}/{} matches, {}/{} for different settings",
        tally.match_count(),
        tally.total_trials(),
        tally.diff_setting_matches,
        tally.diff_setting_trials
    );
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Setting};
    use crate::measurement::{ElectronClassicalRule, QuantumRule};
    use crate::random::XorShift28;

    /// Always reports (Up, Down), whatever the settings.
    struct AlwaysDisagree;

    impl MeasurementRule for AlwaysDisagree {
        fn setting_counts(&self) -> (usize, usize) {
            (3, 3)
        }

        fn measure(&self, _: Setting, _: Setting, _: &mut dyn RandomSource) -> (Outcome, Outcome) {
            (Outcome::Up, Outcome::Down)
        }
    }

    #[test]
    fn test_zero_iterations_yield_empty_tally() {
        let mut rng = XorShift28::new(1);
        let tally = run_electron_experiment(0, &QuantumRule::electron_spin(), &mut rng);
        assert_eq!(tally, ElectronTally::default());
        // No draws were made.
        assert_eq!(rng, XorShift28::new(1));
    }

    #[test]
    fn test_settings_classify_trials() {
        // Settings (0, 0) then (0, 2); the stub rule draws nothing.
        let mut draws = vec![0.1, 0.2, 0.1, 0.9].into_iter();
        let mut rng = move || draws.next().expect("exhausted");
        let tally = run_electron_experiment(2, &AlwaysDisagree, &mut rng);
        assert_eq!(
            tally,
            ElectronTally {
                same_setting_trials: 1,
                same_setting_matches: 0,
                diff_setting_trials: 1,
                diff_setting_matches: 0,
            }
        );
    }

    #[test]
    fn test_counts_add_up() {
        let mut rng = XorShift28::new(5);
        let tally = run_electron_experiment(1_234, &ElectronClassicalRule::mixed(), &mut rng);
        assert_eq!(tally.total_trials(), 1_234);
        assert!(tally.same_setting_matches <= tally.same_setting_trials);
        assert!(tally.diff_setting_matches <= tally.diff_setting_trials);
    }
}
