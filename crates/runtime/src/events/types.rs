//! Event payloads for each topic.

use kicker_core::{ManualGoals, Score, ScoreAction, Team};
use serde::{Deserialize, Serialize};

/// What caused a score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreChange {
    Goal(Team),
    GoalRemoved(Team),
    Reset,
}

/// A score mutation together with the post-mutation snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub change: ScoreChange,
    pub score: Score,
}

/// Events for the manual-correction audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManualGoalsEvent {
    /// One correction was recorded.
    Recorded {
        team: Team,
        action: ScoreAction,
        manual_goals: ManualGoals,
    },

    /// All audit counters were cleared.
    Cleared,
}
