// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod outcome;

pub use error::BellError;
pub use outcome::{Outcome, Setting};

pub mod constants;
pub use constants::bell_constants::{
    CHSH_ALGEBRAIC_BOUND, CHSH_CLASSICAL_BOUND, DEFAULT_ITERATIONS, DEFAULT_SEED, ELECTRON_ANGLES,
    ELECTRON_SETTING_COUNT, OUTCOME_COUNT, PHOTON_ANGLES_A, PHOTON_ANGLES_B, PHOTON_SETTING_COUNT,
    PI, TSIRELSON_BOUND,
};
