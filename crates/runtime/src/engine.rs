//! Authoritative live score engine.
//!
//! [`GameEngine`] is a cloneable handle around one lock-guarded
//! [`GameSnapshot`]. Every mutation takes the lock, applies the change,
//! publishes the resulting event while still holding the lock, and returns.
//! Publishing into the bounded bus never waits, so the lock is held only for
//! the duration of an O(1) update and subscribers observe events in exactly
//! the order mutations were applied.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::{debug, warn};

use kicker_core::{
    GameConfig, GameSnapshot, ManualGoals, Result as GameResult, Score, ScoreAction, Team,
};

use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, ManualGoalsEvent, ScoreChange, ScoreEvent, Topic};

/// Client-facing handle to the score engine.
///
/// Construct once per process and clone into every caller; all clones share
/// the same state and event bus.
#[derive(Clone)]
pub struct GameEngine {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<GameSnapshot>,
    config: GameConfig,
    bus: EventBus,
}

impl GameEngine {
    /// Create an engine with zeroed counters.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(GameSnapshot::default()),
                bus: EventBus::with_capacity(config.event_buffer_size),
                config: config.game,
            }),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.inner.config
    }

    fn lock(&self) -> MutexGuard<'_, GameSnapshot> {
        // Counters stay consistent even if a holder panicked mid-call.
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn resolve_team(&self, team_id: i64, operation: &'static str) -> GameResult<Team> {
        self.inner.config.team_ids.resolve(team_id).inspect_err(|err| {
            warn!(team_id, operation, kind = err.as_str(), "rejected {}: {}", operation, err);
        })
    }

    /// Add one goal for the team with raw identifier `team_id`.
    pub fn add_goal(&self, team_id: i64) -> GameResult<Score> {
        let team = self.resolve_team(team_id, "add_goal")?;
        Ok(self.add_goal_for(team))
    }

    /// Add one goal for an already resolved team.
    pub fn add_goal_for(&self, team: Team) -> Score {
        let mut state = self.lock();
        state.score.increment(team);
        let score = state.score;
        debug!(%team, white = score.white_score, blue = score.blue_score, "goal added");
        self.publish_score(ScoreChange::Goal(team), score);
        score
    }

    /// Remove one goal for the team with raw identifier `team_id`.
    ///
    /// A team already at zero stays at zero; the call succeeds and no event
    /// is published because nothing changed.
    pub fn sub_goal(&self, team_id: i64) -> GameResult<Score> {
        let team = self.resolve_team(team_id, "sub_goal")?;
        Ok(self.sub_goal_for(team))
    }

    /// Remove one goal for an already resolved team, floored at zero.
    pub fn sub_goal_for(&self, team: Team) -> Score {
        let mut state = self.lock();
        let changed = state.score.decrement(team);
        let score = state.score;
        if changed {
            debug!(%team, white = score.white_score, blue = score.blue_score, "goal removed");
            self.publish_score(ScoreChange::GoalRemoved(team), score);
        } else {
            debug!(%team, "goal removal ignored at zero");
        }
        score
    }

    /// Zero both teams. Always publishes, even if the score was already zero.
    pub fn reset_score(&self) -> Score {
        let mut state = self.lock();
        state.score.reset();
        debug!("score reset");
        self.publish_score(ScoreChange::Reset, state.score);
        state.score
    }

    /// Record a manual correction in the audit counters.
    ///
    /// The team is validated before the action, so a request with both wrong
    /// reports [`kicker_core::GameError::InvalidTeam`]. The live score is never touched.
    pub fn update_manual_goals(&self, team_id: i64, action: &str) -> GameResult<ManualGoals> {
        let team = self.resolve_team(team_id, "update_manual_goals")?;
        let action = ScoreAction::parse(action).inspect_err(|err| {
            warn!(
                team_id,
                operation = "update_manual_goals",
                kind = err.as_str(),
                "rejected update_manual_goals: {}",
                err
            );
        })?;
        Ok(self.record_manual_goal(team, action))
    }

    /// Record a manual correction for already validated inputs.
    pub fn record_manual_goal(&self, team: Team, action: ScoreAction) -> ManualGoals {
        let mut state = self.lock();
        state.manual_goals.record(team, action);
        let manual_goals = state.manual_goals;
        debug!(%team, %action, "manual goal recorded");
        self.inner
            .bus
            .publish(Event::ManualGoals(ManualGoalsEvent::Recorded {
                team,
                action,
                manual_goals,
            }));
        manual_goals
    }

    /// Clear the manual-correction audit counters.
    pub fn reset_manual_goals(&self) -> ManualGoals {
        let mut state = self.lock();
        state.manual_goals.reset();
        debug!("manual goals cleared");
        self.inner
            .bus
            .publish(Event::ManualGoals(ManualGoalsEvent::Cleared));
        state.manual_goals
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.lock().score
    }

    /// Current manual-correction counters.
    pub fn manual_goals(&self) -> ManualGoals {
        self.lock().manual_goals
    }

    /// Score and counters read under one lock acquisition.
    pub fn snapshot(&self) -> GameSnapshot {
        *self.lock()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Score` - one event per applied score change
    /// - `Topic::ManualGoals` - manual correction bookkeeping
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.inner.bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.inner.bus
    }

    fn publish_score(&self, change: ScoreChange, score: Score) {
        self.inner
            .bus
            .publish(Event::Score(ScoreEvent { change, score }));
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.snapshot())
            .field("config", &self.inner.config)
            .finish()
    }
}
