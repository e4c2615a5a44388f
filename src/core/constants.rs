//! Fixed apparatus geometry shared by the simulations.

/// Detector angles, in degrees, for the two experiments.
pub mod bell_constants {
    /// Used to convert detector angles to radians.
    pub const PI: f64 = std::f64::consts::PI;

    /// Number of distinct outcomes a detector can report.
    pub const OUTCOME_COUNT: usize = 2;

    /// Settings per side in the electron-spin experiment.
    pub const ELECTRON_SETTING_COUNT: usize = 3;
    /// Electron detector angles; both sides share this table.
    pub const ELECTRON_ANGLES: [f64; ELECTRON_SETTING_COUNT] = [0.0, 120.0, 240.0];

    /// Settings per side in the photon-polarization experiment.
    pub const PHOTON_SETTING_COUNT: usize = 2;
    /// Photon detector angles for side A.
    pub const PHOTON_ANGLES_A: [f64; PHOTON_SETTING_COUNT] = [0.0, 45.0];
    /// Photon detector angles for side B.
    pub const PHOTON_ANGLES_B: [f64; PHOTON_SETTING_COUNT] = [22.5, 67.5];

    /// Local hidden variable bound on the CHSH statistic.
    pub const CHSH_CLASSICAL_BOUND: f64 = 2.0;
    /// Tsirelson bound, `2√2`.
    pub const TSIRELSON_BOUND: f64 = 2.0 * std::f64::consts::SQRT_2;
    /// Algebraic maximum of `|S|` for four correlations in `[-1, 1]`.
    pub const CHSH_ALGEBRAIC_BOUND: f64 = 4.0;

    /// Trial count used by the demos and the default configuration.
    pub const DEFAULT_ITERATIONS: u64 = 10_000;
    /// Seed used by the default deterministic source.
    pub const DEFAULT_SEED: u32 = 1;
}
