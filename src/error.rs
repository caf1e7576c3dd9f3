//! Error types for the agent

use std::path::PathBuf;

use thiserror::Error;

use crate::{abstraction::StateKey, action::Action};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An inference-mode agent was asked to play without a trained table
    #[error("no trained table '{name}' at {}", .path.display())]
    MissingModel { name: String, path: PathBuf },

    #[error("table file {} is not a valid Q-table: {source}", .path.display())]
    CorruptTable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An update produced a value that cannot be persisted, e.g. from an infinite score
    #[error("update of {key} {action} produced non-finite value {value}")]
    NonFiniteValue {
        key: StateKey,
        action: Action,
        value: f64,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `map_err` adapter that tags an I/O failure with what was being done and where
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io {
            operation,
            path,
            source,
        }
    }
}
