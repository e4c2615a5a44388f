// src/experiment/results.rs
use crate::core::{Outcome, PHOTON_SETTING_COUNT, Setting};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `value / total`, or `0.0` when nothing was counted.
fn ratio(value: u64, total: u64) -> f64 {
    if total == 0 { 0.0 } else { value as f64 / total as f64 }
}

/// Renders a count as `value/total = NN.NN%`.
pub fn format_percentage(value: u64, total: u64) -> String {
    format!("{}/{} = {:.2}%", value, total, ratio(value, total) * 100.0)
}

/// Raw counters of an electron-spin run.
///
/// Trials are split by whether both detectors happened to pick the same
/// setting. No normalisation happens here; the ratio helpers are provided for
/// callers that want percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElectronTally {
    /// Trials where both detectors chose the same setting.
    pub same_setting_trials: u64,
    /// Matching outcomes among `same_setting_trials`.
    pub same_setting_matches: u64,
    /// Trials where the detectors chose different settings.
    pub diff_setting_trials: u64,
    /// Matching outcomes among `diff_setting_trials`.
    pub diff_setting_matches: u64,
}

impl ElectronTally {
    /// Counts one trial. (Internal visibility)
    pub(crate) fn record(&mut self, same_setting: bool, outcomes_match: bool) {
        let matched = u64::from(outcomes_match);
        if same_setting {
            self.same_setting_trials += 1;
            self.same_setting_matches += matched;
        } else {
            self.diff_setting_trials += 1;
            self.diff_setting_matches += matched;
        }
    }

    /// All trials of the run.
    pub fn total_trials(&self) -> u64 {
        self.same_setting_trials + self.diff_setting_trials
    }

    /// All matching trials of the run.
    pub fn match_count(&self) -> u64 {
        self.same_setting_matches + self.diff_setting_matches
    }

    /// Fraction of all trials with matching outcomes.
    pub fn match_ratio(&self) -> f64 {
        ratio(self.match_count(), self.total_trials())
    }

    /// Fraction of same-setting trials with matching outcomes.
    pub fn same_setting_match_ratio(&self) -> f64 {
        ratio(self.same_setting_matches, self.same_setting_trials)
    }

    /// Fraction of different-setting trials with matching outcomes.
    pub fn diff_setting_match_ratio(&self) -> f64 {
        ratio(self.diff_setting_matches, self.diff_setting_trials)
    }
}

impl fmt::Display for ElectronTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matching outcomes: {}", format_percentage(self.match_count(), self.total_trials()))?;
        writeln!(
            f,
            "Matching outcomes for same settings: {}",
            format_percentage(self.same_setting_matches, self.same_setting_trials)
        )?;
        writeln!(
            f,
            "Matching outcomes for diff settings: {}",
            format_percentage(self.diff_setting_matches, self.diff_setting_trials)
        )
    }
}

/// Coincidence counts for one fixed pair of photon settings, indexed by
/// `(outcome_a, outcome_b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoincidenceMatrix {
    counts: [[u64; 2]; 2],
}

impl CoincidenceMatrix {
    /// Builds a matrix from explicit counts `[[n00, n01], [n10, n11]]`.
    pub fn from_counts(counts: [[u64; 2]; 2]) -> Self {
        Self { counts }
    }

    /// Counts one trial. (Internal visibility)
    pub(crate) fn record(&mut self, outcome_a: Outcome, outcome_b: Outcome) {
        self.counts[outcome_a.index()][outcome_b.index()] += 1;
    }

    /// Number of trials with this outcome combination.
    pub fn count(&self, outcome_a: Outcome, outcome_b: Outcome) -> u64 {
        self.counts[outcome_a.index()][outcome_b.index()]
    }

    /// Sum of all four cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Correlation `E = (n00 - n01 - n10 + n11) / total`, always in `[-1, 1]`.
    /// An empty matrix has correlation `0`.
    pub fn correlation(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let [[n00, n01], [n10, n11]] = self.counts;
        ((n00 + n11) as f64 - (n01 + n10) as f64) / total as f64
    }
}

/// Full outcome of a photon-polarization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotonReport {
    /// Coincidence matrix per `[setting_a][setting_b]`.
    matrices: [[CoincidenceMatrix; PHOTON_SETTING_COUNT]; PHOTON_SETTING_COUNT],
}

impl PhotonReport {
    /// Creates a report with all matrices empty. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { matrices: [[CoincidenceMatrix::default(); PHOTON_SETTING_COUNT]; PHOTON_SETTING_COUNT] }
    }

    /// Wraps four matrices laid out as `[setting_a][setting_b]`.
    pub fn from_matrices(
        matrices: [[CoincidenceMatrix; PHOTON_SETTING_COUNT]; PHOTON_SETTING_COUNT],
    ) -> Self {
        Self { matrices }
    }

    /// Mutable matrix for a setting pair. (Internal visibility)
    pub(crate) fn matrix_mut(&mut self, setting_a: Setting, setting_b: Setting) -> &mut CoincidenceMatrix {
        &mut self.matrices[setting_a.index()][setting_b.index()]
    }

    /// Matrix for a setting pair.
    pub fn matrix(&self, setting_a: Setting, setting_b: Setting) -> &CoincidenceMatrix {
        &self.matrices[setting_a.index()][setting_b.index()]
    }

    /// Correlation `E(a, b)` for a setting pair.
    pub fn correlation(&self, setting_a: Setting, setting_b: Setting) -> f64 {
        self.matrix(setting_a, setting_b).correlation()
    }

    /// The CHSH statistic `S = E(0,0) - E(0,1) + E(1,0) + E(1,1)`.
    pub fn chsh(&self) -> f64 {
        self.correlation(Setting(0), Setting(0)) - self.correlation(Setting(0), Setting(1))
            + self.correlation(Setting(1), Setting(0))
            + self.correlation(Setting(1), Setting(1))
    }
}

impl fmt::Display for PhotonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {}", self.chsh())?;
        for a in 0..PHOTON_SETTING_COUNT {
            for b in 0..PHOTON_SETTING_COUNT {
                let matrix = self.matrix(Setting(a), Setting(b));
                writeln!(
                    f,
                    "  E(a{}, b{}) = {:+.4} over {} trials",
                    a, b, matrix.correlation(), matrix.total()
                )?;
            }
        }
        Ok(())
    }
}
