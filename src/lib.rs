//! A tabular Q-learning agent that learns to cross traffic lanes on a grid
//!
//! The agent sees the game only through an [`Observation`](env::Observation), reduces it to
//! the eight cells around the frog, and learns one value per action for each such
//! neighbourhood. Tables persist as JSON, one file per named table.

/// Learning algorithms
pub mod algo;

/// State abstraction
pub mod abstraction;

/// The fixed action set
pub mod action;

/// Game observations
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Pending transitions
pub mod memory;

/// Reward shaping
pub mod reward;

/// Table persistence
pub mod store;

mod util;

pub use abstraction::{key_for, StateKey};
pub use action::Action;
pub use algo::tabular::{Mode, QAgent, QAgentConfig, QTable};
pub use error::{Error, Result};
