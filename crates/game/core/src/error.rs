//! Validation errors for score operations.
//!
//! Both variants describe malformed caller input. They are reported
//! synchronously and never leave partial state behind, so callers can map them
//! straight to a "bad request" style response.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The raw identifier matches neither configured team alias.
    #[error("bad team ID: {0}")]
    InvalidTeam(i64),

    /// The action string is neither `add` nor `sub`.
    #[error("bad action type: {0:?}")]
    InvalidAction(String),
}

impl GameError {
    /// Short label for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTeam(_) => "invalid_team",
            Self::InvalidAction(_) => "invalid_action",
        }
    }
}
