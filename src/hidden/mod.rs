// src/hidden/mod.rs

//! Hidden-variable assignments for the local realistic model.
//!
//! A [`PredeterminedOutcomes`] value is the complete instruction set a
//! particle pair carries away from the source: one fixed outcome for every
//! setting either detector might choose. It is drawn fresh for each trial and
//! read, never modified, by [`crate::measurement::ClassicalRule`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Outcome, Setting};
use crate::random::{RandomSource, random_outcome};

/// How the hidden-variable assignment for a trial is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HiddenVariableModel {
    /// Every slot is an independent fair coin; all-equal sets are allowed.
    #[default]
    Unconstrained,
    /// Sets whose slots all agree are rejected and redrawn, so every
    /// accepted set holds at least two distinct outcomes.
    Mixed,
}

/// One predetermined outcome per detector setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredeterminedOutcomes<const N: usize> {
    outcomes: [Outcome; N],
}

impl<const N: usize> PredeterminedOutcomes<N> {
    /// Wraps an explicit assignment.
    pub fn from_outcomes(outcomes: [Outcome; N]) -> Self {
        Self { outcomes }
    }

    /// Draws one outcome per slot, in slot order.
    pub fn unconstrained(rng: &mut dyn RandomSource) -> Self {
        Self { outcomes: std::array::from_fn(|_| random_outcome(&mut *rng)) }
    }

    /// Draws unconstrained sets until one contains two distinct outcomes.
    ///
    /// Invariant: with two outcomes and `N >= 2` slots each attempt is
    /// rejected with probability `2 / 2^N`, so the loop ends with
    /// probability one after `2^N / (2^N - 2)` attempts on average. There is
    /// deliberately no attempt cap; a cap would bias the accepted sets.
    pub fn mixed(rng: &mut dyn RandomSource) -> Self {
        assert!(N >= 2, "a mixed assignment needs at least two settings");
        let mut rejected = 0u64;
        loop {
            let candidate = Self::unconstrained(rng);
            if !candidate.is_uniform() {
                if rejected > 0 {
                    log::trace!("mixed assignment accepted after {} rejections", rejected);
                }
                return candidate;
            }
            rejected += 1;
        }
    }

    /// Draws a set according to `model`.
    pub fn generate(model: HiddenVariableModel, rng: &mut dyn RandomSource) -> Self {
        match model {
            HiddenVariableModel::Unconstrained => Self::unconstrained(rng),
            HiddenVariableModel::Mixed => Self::mixed(rng),
        }
    }

    /// The outcome fixed for `setting`.
    ///
    /// Panics if `setting` is not below `N`.
    pub fn outcome_for(&self, setting: Setting) -> Outcome {
        self.outcomes[setting.index()]
    }

    /// True when every slot holds the same outcome.
    pub fn is_uniform(&self) -> bool {
        self.outcomes.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// All slots in setting order.
    pub fn outcomes(&self) -> &[Outcome; N] {
        &self.outcomes
    }
}

impl<const N: usize> fmt::Display for PredeterminedOutcomes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predetermined[")?;
        for (i, outcome) in self.outcomes.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, outcome)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShift28;

    #[test]
    fn test_unconstrained_reads_one_draw_per_slot() {
        let mut draws = vec![0.1, 0.9, 0.6].into_iter();
        let mut rng = move || draws.next().expect("exhausted");
        let set = PredeterminedOutcomes::<3>::unconstrained(&mut rng);
        assert_eq!(set.outcomes(), &[Outcome::Up, Outcome::Down, Outcome::Down]);
    }

    #[test]
    fn test_mixed_rejects_uniform_sets() {
        // First attempt is all Up, second all Down, third is mixed.
        let mut draws = vec![0.1, 0.2, 0.3, 0.7, 0.8, 0.9, 0.7, 0.1, 0.9].into_iter();
        let mut rng = move || draws.next().expect("exhausted");
        let set = PredeterminedOutcomes::<3>::mixed(&mut rng);
        assert_eq!(set.outcomes(), &[Outcome::Down, Outcome::Up, Outcome::Down]);
    }

    #[test]
    fn test_mixed_sets_are_never_uniform() {
        let mut rng = XorShift28::new(1);
        for _ in 0..10_000 {
            assert!(!PredeterminedOutcomes::<3>::mixed(&mut rng).is_uniform());
        }
    }

    #[test]
    fn test_unconstrained_produces_uniform_sets_sometimes() {
        // Two of the eight 3-slot sets are uniform.
        let mut rng = XorShift28::new(1);
        let uniform = (0..8_000)
            .filter(|_| PredeterminedOutcomes::<3>::unconstrained(&mut rng).is_uniform())
            .count();
        assert!((1_700..2_300).contains(&uniform), "uniform sets: {}", uniform);
    }

    #[test]
    fn test_outcome_lookup_and_display() {
        let set = PredeterminedOutcomes::from_outcomes([Outcome::Up, Outcome::Down]);
        assert_eq!(set.outcome_for(Setting(1)), Outcome::Down);
        assert_eq!(set.to_string(), "Predetermined[Up, Down]");
    }
}
