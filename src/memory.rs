use crate::{abstraction::StateKey, action::Action};

/// The most recent state-action pair taken while training
///
/// Its value cannot be updated until the state the action led to has been observed, so it is
/// held here until the next decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The key of the state the action was taken from
    pub key: StateKey,
    /// The action taken in that state
    pub action: Action,
}
