//! Error handling logic

use std::fmt;

/// Error types raised outside the simulation loops.
///
/// The trial loops themselves never fail: every index they draw is in range
/// by construction. These variants cover configuration mistakes made by the
/// caller and the post-run bound checks in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum BellError {
    /// The experiment configuration cannot be run (e.g. zero iterations).
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String
    },

    /// A setting index was outside the apparatus' angle table.
    SettingOutOfRange {
        /// The rejected index
        setting: usize,
        /// Number of settings available on that side
        bound: usize,
    },

    /// A statistic fell outside the range it is mathematically confined to.
    BoundViolation {
        /// BoundViolation failure message
        message: String
    },
}

impl fmt::Display for BellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BellError::InvalidConfiguration { message } => write!(f, "Invalid Configuration: {}", message),
            BellError::SettingOutOfRange { setting, bound } => {
                write!(f, "Setting Out Of Range: index {} (apparatus has {} settings)", setting, bound)
            }
            BellError::BoundViolation { message } => write!(f, "Bound Violation: {}", message),
        }
    }
}

impl std::error::Error for BellError {}
