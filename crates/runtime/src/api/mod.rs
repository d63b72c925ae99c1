//! Public runtime API surface.
//!
//! Error types and the listener abstraction live here so the engine and
//! worker modules stay focused on state and plumbing.

pub mod errors;
pub mod listener;

pub use errors::{Result, RuntimeError};
pub use listener::ScoreListener;
