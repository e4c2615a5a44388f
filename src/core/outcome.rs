// src/core/outcome.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::BellError;

/// Index of a detector setting (a row in the apparatus' angle table).
///
/// A setting is chosen once per trial and side and never changes afterwards.
/// Its validity depends on which apparatus it is used with, so range checks
/// live on [`crate::measurement::MeasurementRule::try_measure`] and
/// [`Setting::checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Setting(pub usize);

impl Setting {
    /// Builds a setting after checking it against the number of settings on
    /// that side of the apparatus.
    pub fn checked(index: usize, bound: usize) -> Result<Self, BellError> {
        if index < bound {
            Ok(Self(index))
        } else {
            Err(BellError::SettingOutOfRange { setting: index, bound })
        }
    }

    /// Position in the angle table.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setting({})", self.0)
    }
}

/// A binary detector reading.
///
/// For electrons the two values are spin up/down; for photons they are the
/// `+`/`-` polarization channels. `Up` has index 0 and `Down` index 1, which
/// is the layout coincidence matrices are indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// Outcome index 0.
    Up,
    /// Outcome index 1.
    Down,
}

impl Outcome {
    /// Maps an outcome index onto an outcome. Only 0 maps to `Up`.
    pub fn from_index(index: usize) -> Self {
        if index == 0 { Outcome::Up } else { Outcome::Down }
    }

    /// Index of this outcome (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Outcome::Up => 0,
            Outcome::Down => 1,
        }
    }

    /// The other outcome.
    pub fn opposite(self) -> Self {
        match self {
            Outcome::Up => Outcome::Down,
            Outcome::Down => Outcome::Up,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Up => write!(f, "Up"),
            Outcome::Down => write!(f, "Down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_index_mapping() {
        assert_eq!(Outcome::from_index(0), Outcome::Up);
        assert_eq!(Outcome::from_index(1), Outcome::Down);
        assert_eq!(Outcome::Up.index(), 0);
        assert_eq!(Outcome::Down.opposite(), Outcome::Up);
        assert_eq!(Outcome::Up.opposite().opposite(), Outcome::Up);
    }

    #[test]
    fn test_setting_checked() {
        assert_eq!(Setting::checked(2, 3), Ok(Setting(2)));
        assert_eq!(
            Setting::checked(2, 2),
            Err(BellError::SettingOutOfRange { setting: 2, bound: 2 })
        );
    }
}
