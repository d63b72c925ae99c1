//! Worker tasks that back the runtime.
//!
//! The listener worker forwards score events to pluggable sinks without ever
//! holding the engine lock.

mod listener;

pub use listener::spawn_score_listener;
