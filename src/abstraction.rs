use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env::Observation;

/// Sentinel written for an empty or off-board cell
pub const EMPTY: char = '_';

/// Offsets of the cells encoded in a [`StateKey`], in key order: the row above the frog,
/// then its left and right neighbours, then the row below
pub const NEIGHBORHOOD: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Compact digest of the frog's immediate surroundings, used as the Q-table index
///
/// Two observations with the same eight neighbouring occupants share a key no matter how the
/// rest of the board differs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

/// Reduce an observation to its [`StateKey`]
///
/// Total over every observation: cells off the board read as [`EMPTY`].
pub fn key_for<O: Observation + ?Sized>(state: &O) -> StateKey {
    StateKey(
        NEIGHBORHOOD
            .iter()
            .map(|&(dx, dy)| state.occupant_at(dx, dy).unwrap_or(EMPTY))
            .collect(),
    )
}
