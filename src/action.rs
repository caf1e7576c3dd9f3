use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The fixed action set available to the frog
///
/// Variant order is significant: it is the enumeration order used to break ties between
/// equally valued actions, and the order in which actions appear in a persisted table row.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
pub enum Action {
    #[serde(rename = "u")]
    #[strum(serialize = "u")]
    Up,
    #[serde(rename = "d")]
    #[strum(serialize = "d")]
    Down,
    #[serde(rename = "l")]
    #[strum(serialize = "l")]
    Left,
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    Right,
    #[serde(rename = "_")]
    #[strum(serialize = "_")]
    Stay,
}

impl Action {
    /// Every action, in enumeration order
    pub const ALL: [Action; Action::COUNT] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Stay,
    ];

    /// Position of this action within [`Action::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
