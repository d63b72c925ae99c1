//! Topic-based event bus for score notifications.
//!
//! Score changes and manual-correction updates travel on separate topics, so
//! a scoreboard never sees audit traffic it does not render.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ManualGoalsEvent, ScoreChange, ScoreEvent};
