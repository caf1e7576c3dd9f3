use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};
use strum::EnumCount;

use crate::{
    action::Action,
    assert_interval,
    error::{Error, Result},
};

/// Exploration policy result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// Epsilon greedy exploration policy with a fixed epsilon threshold
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f64) -> Self {
        assert_interval!(epsilon, 0.0, 1.0);
        Self { epsilon }
    }

    /// Explore when a uniform draw from `[0,1)` lands at or below epsilon
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f64>() > self.epsilon {
            Choice::Exploit
        } else {
            Choice::Explore
        }
    }
}

/// Random action selection biased by fixed per-action weights
///
/// Used in place of a uniform draw when exploring, so that exploration still tends to move
/// the frog forward.
#[derive(Debug, Clone)]
pub struct WeightedExploration {
    dist: WeightedIndex<u32>,
}

impl WeightedExploration {
    /// `weights` are indexed in [`Action::ALL`] order
    pub fn new(weights: [u32; Action::COUNT]) -> Result<Self> {
        let dist = WeightedIndex::new(weights).map_err(|e| Error::InvalidConfiguration {
            message: format!("exploration weights {weights:?}: {e}"),
        })?;
        Ok(Self { dist })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action::ALL[self.dist.sample(rng)]
    }
}
