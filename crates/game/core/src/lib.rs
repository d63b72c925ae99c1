//! Score rules and data types for a two-team table-soccer match.
//!
//! `kicker-core` defines the canonical score record, the manual-correction
//! audit counters, and the validation of raw team and action identifiers.
//! Everything here is plain data; the runtime crate owns the live instance and
//! serialises access to it.
pub mod config;
pub mod error;
pub mod state;
pub mod team;

pub use config::{GameConfig, TableLayout, TeamIds};
pub use error::{GameError, Result};
pub use state::{GameSnapshot, ManualGoals, Score};
pub use team::{ScoreAction, Team};
