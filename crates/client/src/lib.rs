//! Composition root pieces for the `kicker` binary.
//!
//! ```text
//! stdin (controller feed) ──→ Controller ──→ GameEngine ──→ EventBus
//!                                                            └─→ LogScoreboard
//! ```
//!
//! The HTTP layer and real displays live elsewhere; this crate wires the
//! engine to a line-oriented controller feed and a logging scoreboard so the
//! engine can be driven and observed from a terminal.

pub mod config;
pub mod controller;
pub mod scoreboard;

pub use config::ClientConfig;
pub use controller::{CommandError, Controller, ControllerCommand};
pub use scoreboard::LogScoreboard;
