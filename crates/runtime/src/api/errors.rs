//! Error types surfaced by the runtime API.
//!
//! Score operations fail only with [`GameError`]; listener implementations
//! report their own failures through [`RuntimeError::Listener`].
use thiserror::Error;

pub use kicker_core::GameError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("score listener failed: {0}")]
    Listener(String),
}

impl RuntimeError {
    pub fn listener(message: impl Into<String>) -> Self {
        Self::Listener(message.into())
    }
}
