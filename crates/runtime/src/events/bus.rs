//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{ManualGoalsEvent, ScoreEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Live score changes
    Score,
    /// Manual-correction audit counters
    ManualGoals,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Score(ScoreEvent),
    ManualGoals(ManualGoalsEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Score(_) => Topic::Score,
            Event::ManualGoals(_) => Topic::ManualGoals,
        }
    }
}

/// Topic-based event bus
///
/// Each topic is a bounded broadcast channel. Publishing never waits: a
/// subscriber that falls more than `capacity` events behind loses the oldest
/// ones and observes [`broadcast::error::RecvError::Lagged`].
#[derive(Clone)]
pub struct EventBus {
    score: broadcast::Sender<Event>,
    manual_goals: broadcast::Sender<Event>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            score: broadcast::channel(capacity).0,
            manual_goals: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Score => &self.score,
            Topic::ManualGoals => &self.manual_goals,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// The receiver only sees events published after this call.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Number of live subscribers on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
