//! Live score engine for a table-soccer match.
//!
//! This crate owns the authoritative score, serialises every mutation behind a
//! single lock, and pushes snapshots to observers through a bounded,
//! non-blocking event bus. Consumers construct one [`GameEngine`], clone the
//! handle into their request handlers, and subscribe displays through
//! [`GameEngine::subscribe`] or [`spawn_score_listener`].
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the score engine handle
//! - [`api`] exposes error and listener types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`config`] loads runtime tunables from the environment
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod engine;
pub mod events;

mod workers;

pub use api::{Result, RuntimeError, ScoreListener};
pub use config::RuntimeConfig;
pub use engine::GameEngine;
pub use events::{Event, EventBus, ManualGoalsEvent, ScoreChange, ScoreEvent, Topic};
pub use workers::spawn_score_listener;

pub use kicker_core::{
    GameConfig, GameError, GameSnapshot, ManualGoals, Score, ScoreAction, TableLayout, Team,
    TeamIds,
};
