// src/validation/mod.rs

//! Bound checks on experiment statistics.

use crate::core::{BellError, CHSH_ALGEBRAIC_BOUND, CHSH_CLASSICAL_BOUND};
use crate::experiment::{ElectronTally, PhotonReport, SETTING_PAIRS};

// Allowance for floating point rounding in the bound checks.
const DEFAULT_BOUND_TOLERANCE: f64 = 1e-12;

/// Checks that a correlation lies in `[-1, 1]`.
///
/// # Returns
/// * `Ok(())` if the value is within bounds.
/// * `Err(BellError::BoundViolation)` otherwise, including for NaN.
pub fn check_correlation(correlation: f64) -> Result<(), BellError> {
    if (-1.0 - DEFAULT_BOUND_TOLERANCE..=1.0 + DEFAULT_BOUND_TOLERANCE).contains(&correlation) {
        Ok(())
    } else {
        Err(BellError::BoundViolation {
            message: format!("Correlation {} outside [-1, 1]", correlation),
        })
    }
}

/// Checks that a CHSH statistic lies in `[-4, 4]`.
pub fn check_chsh(s: f64) -> Result<(), BellError> {
    let bound = CHSH_ALGEBRAIC_BOUND + DEFAULT_BOUND_TOLERANCE;
    if (-bound..=bound).contains(&s) {
        Ok(())
    } else {
        Err(BellError::BoundViolation {
            message: format!("CHSH statistic {} outside [-4, 4]", s),
        })
    }
}

/// True when `|S|` exceeds the local hidden variable bound of 2.
pub fn violates_bell_inequality(s: f64) -> bool {
    s.abs() > CHSH_CLASSICAL_BOUND
}

/// Checks that every same-setting trial produced matching outcomes.
///
/// Every model in this crate guarantees this with probability one, so a
/// failure points at a broken measurement rule.
pub fn check_same_setting_agreement(tally: &ElectronTally) -> Result<(), BellError> {
    if tally.same_setting_matches == tally.same_setting_trials {
        Ok(())
    } else {
        Err(BellError::BoundViolation {
            message: format!(
                "Only {} of {} same-setting trials matched",
                tally.same_setting_matches, tally.same_setting_trials
            ),
        })
    }
}

/// Checks every correlation and the combined statistic of a photon run.
pub fn validate_photon_report(report: &PhotonReport) -> Result<(), BellError> {
    for (setting_a, setting_b) in SETTING_PAIRS {
        check_correlation(report.correlation(setting_a, setting_b)).map_err(|err| match err {
            BellError::BoundViolation { message } => BellError::BoundViolation {
                message: format!("{} for {} / {}", message, setting_a, setting_b),
            },
            other => other,
        })?;
    }
    check_chsh(report.chsh())
}

/// Checks that all four setting pairs saw the same number of trials.
pub fn check_balanced_trials(report: &PhotonReport, iterations: u64) -> Result<(), BellError> {
    for (setting_a, setting_b) in SETTING_PAIRS {
        let total = report.matrix(setting_a, setting_b).total();
        if total != iterations {
            return Err(BellError::BoundViolation {
                message: format!(
                    "{} / {} recorded {} trials, expected {}",
                    setting_a, setting_b, total, iterations
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::CoincidenceMatrix;

    #[test]
    fn test_correlation_bounds() {
        assert!(check_correlation(1.0).is_ok());
        assert!(check_correlation(-1.0).is_ok());
        assert!(check_correlation(0.3).is_ok());
        assert!(check_correlation(1.01).is_err());
        assert!(check_correlation(f64::NAN).is_err());
    }

    #[test]
    fn test_chsh_bounds_and_violation() {
        assert!(check_chsh(4.0).is_ok());
        assert!(check_chsh(-4.0).is_ok());
        assert!(check_chsh(4.1).is_err());
        assert!(!violates_bell_inequality(2.0));
        assert!(violates_bell_inequality(2.83));
        assert!(violates_bell_inequality(-2.5));
    }

    #[test]
    fn test_same_setting_agreement() {
        let good = ElectronTally { same_setting_trials: 3, same_setting_matches: 3, ..Default::default() };
        let bad = ElectronTally { same_setting_trials: 3, same_setting_matches: 2, ..Default::default() };
        assert!(check_same_setting_agreement(&good).is_ok());
        assert!(check_same_setting_agreement(&bad).is_err());
    }

    #[test]
    fn test_balanced_trials() {
        let m = CoincidenceMatrix::from_counts([[2, 1], [1, 1]]);
        let report = PhotonReport::from_matrices([[m, m], [m, m]]);
        assert!(check_balanced_trials(&report, 5).is_ok());
        assert!(check_balanced_trials(&report, 6).is_err());
        assert!(validate_photon_report(&report).is_ok());
    }
}
