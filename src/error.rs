//! Error type for configuration and leaderboard loading
//!
//! The simulation tick itself never fails; only building a round from
//! external data can.

use thiserror::Error;

/// Errors raised while loading or validating configuration data
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON could not be parsed into the expected shape
    #[error("malformed json: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed fine but cannot produce a playable world
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
